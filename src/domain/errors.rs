//! Store error kinds.

use thiserror::Error;

/// Failure kinds a [`crate::domain::repositories::UrlRepository`] can report.
///
/// Handlers branch on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live record matches the alias.
    #[error("url not found")]
    NotFound,

    /// The alias is already taken.
    #[error("alias already exists: {0}")]
    Conflict(String),

    /// Any other persistence failure.
    #[error("storage error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
