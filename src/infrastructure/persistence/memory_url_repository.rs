//! In-process implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;

/// URL repository backed by a [`DashMap`] keyed by alias.
///
/// Insertion goes through the map's entry API, which holds the shard lock
/// for the key, so concurrent saves of one alias have exactly one winner.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
    last_id: AtomicI64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save(&self, destination: &str, alias: &str) -> Result<i64, StoreError> {
        match self.records.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(alias.to_owned())),
            Entry::Vacant(slot) => {
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(UrlRecord::new(id, alias, destination));
                Ok(id)
            }
        }
    }

    async fn get(&self, alias: &str) -> Result<String, StoreError> {
        self.records
            .get(alias)
            .map(|record| record.destination.clone())
            .filter(|destination| !destination.is_empty())
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        self.records
            .remove(alias)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = MemoryUrlRepository::new();

        let id = repo.save("https://example.com", "abc123").await.unwrap();
        assert_eq!(id, 1);

        let url = repo.get("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_ids_are_increasing() {
        let repo = MemoryUrlRepository::new();

        let first = repo.save("https://a.example", "a").await.unwrap();
        let second = repo.save("https://b.example", "b").await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_duplicate_alias_conflicts() {
        let repo = MemoryUrlRepository::new();

        repo.save("https://example.com", "dup").await.unwrap();
        let err = repo.save("https://other.com", "dup").await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(repo.get("dup").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_get_missing_alias() {
        let repo = MemoryUrlRepository::new();

        let err = repo.get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_destination_is_not_found() {
        let repo = MemoryUrlRepository::new();
        repo.save("", "blank").await.unwrap();

        let err = repo.get("blank").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryUrlRepository::new();
        repo.save("https://example.com", "gone").await.unwrap();

        repo.delete("gone").await.unwrap();
        assert!(repo.is_empty());

        let err = repo.delete("gone").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_have_single_winner() {
        let repo = Arc::new(MemoryUrlRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save(&format!("https://example.com/{i}"), "race").await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert!(e.is_conflict()),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}
