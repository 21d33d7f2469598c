//! Alias creation, lookup and removal service.

use std::sync::Arc;

use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::{generate_alias, is_reserved_alias};

/// Service for creating, resolving and removing alias mappings.
///
/// Holds the store behind the [`UrlRepository`] trait so the PostgreSQL and
/// in-memory stores are interchangeable.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    alias_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// # Arguments
    ///
    /// - `repository` - backing store
    /// - `alias_length` - length of aliases generated when the caller gives none
    pub fn new(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    pub fn alias_length(&self) -> usize {
        self.alias_length
    }

    /// Stores `destination` under `alias`, generating an alias when none (or
    /// an empty one) is supplied.
    ///
    /// Returns the record id together with the alias that was used. A
    /// generated alias that collides is reported as a conflict, not retried.
    /// Generated aliases never hit a reserved name; rejecting a reserved
    /// caller-supplied alias is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the alias is taken.
    /// Returns [`StoreError::Internal`] on storage failures.
    pub async fn shorten(
        &self,
        destination: &str,
        alias: Option<String>,
    ) -> Result<(i64, String), StoreError> {
        let alias = match alias {
            Some(alias) if !alias.is_empty() => alias,
            _ => self.fresh_alias(),
        };

        let id = self.repository.save(destination, &alias).await?;

        Ok((id, alias))
    }

    fn fresh_alias(&self) -> String {
        loop {
            let alias = generate_alias(self.alias_length);
            if !is_reserved_alias(&alias) {
                return alias;
            }
        }
    }

    /// Returns the destination stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.repository.get(alias).await
    }

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias is unknown.
    pub async fn remove(&self, alias: &str) -> Result<(), StoreError> {
        self.repository.delete(alias).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    fn service(repo: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(repo), 6)
    }

    #[tokio::test]
    async fn test_shorten_with_custom_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|url, alias| url == "https://example.com" && alias == "mylink")
            .times(1)
            .returning(|_, _| Ok(42));

        let (id, alias) = service(mock_repo)
            .shorten("https://example.com", Some("mylink".to_string()))
            .await
            .unwrap();

        assert_eq!(id, 42);
        assert_eq!(alias, "mylink");
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_absent() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|_, alias| alias.len() == 6 && alias.chars().all(|c| c.is_ascii_alphanumeric()))
            .times(1)
            .returning(|_, _| Ok(1));

        let (_, alias) = service(mock_repo)
            .shorten("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(alias.len(), 6);
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_empty() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|_, alias| alias.len() == 6)
            .times(1)
            .returning(|_, _| Ok(1));

        let (_, alias) = service(mock_repo)
            .shorten("https://example.com", Some(String::new()))
            .await
            .unwrap();

        assert!(!alias.is_empty());
    }

    #[tokio::test]
    async fn test_shorten_respects_configured_length() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo), 12);
        let (_, alias) = service.shorten("https://example.com", None).await.unwrap();

        assert_eq!(alias.len(), 12);
    }

    #[tokio::test]
    async fn test_shorten_conflict_is_not_retried() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, alias| Err(StoreError::Conflict(alias.to_string())));

        let err = service(mock_repo)
            .shorten("https://example.com", None)
            .await
            .unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_get()
            .withf(|alias| alias == "missing")
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let err = service(mock_repo).resolve("missing").await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remove_delegates_to_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock_repo).remove("abc123").await.is_ok());
    }
}
