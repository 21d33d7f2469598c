//! Repository trait for alias to URL mappings.

use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// Alias uniqueness is enforced by the implementation atomically; callers
/// never check-then-insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the alias already exists.
    /// Returns [`StoreError::Internal`] on any other persistence failure.
    async fn save(&self, destination: &str, alias: &str) -> Result<i64, StoreError>;

    /// Returns the destination stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches or the stored
    /// destination is empty.
    async fn get(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row was affected.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;
}
