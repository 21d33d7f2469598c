//! Authentication service for HTTP Basic credentials.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Verifies the single configured user/password pair.
///
/// Only the SHA-256 digest of the password is kept in memory, and candidate
/// passwords are compared digest to digest so the comparison does not depend
/// on the length of the configured secret.
pub struct AuthService {
    user: String,
    password_digest: [u8; 32],
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(user: impl Into<String>, password: &str) -> Self {
        Self {
            user: user.into(),
            password_digest: digest(password),
        }
    }

    /// Checks a user/password pair taken from an `Authorization: Basic` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if either the user or the password
    /// does not match.
    pub fn authenticate(&self, user: &str, password: &str) -> Result<(), AppError> {
        let user_ok = digest(user) == digest(&self.user);
        let password_ok = digest(password) == self.password_digest;

        if !(user_ok && password_ok) {
            return Err(AppError::unauthorized("Unauthorized"));
        }

        Ok(())
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
