//! Random alias generation.
//!
//! Generated aliases are not checked for uniqueness here; the store rejects
//! a colliding alias with a conflict error.
//!
//! Some aliases are shadowed by fixed routes (`GET /health`, `/url`) and can
//! never be redirected; see [`is_reserved_alias`].

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated alias.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Aliases that collide with fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Returns `true` if `alias` would be shadowed by a fixed route.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Generates a random alias of `length` characters drawn from `[A-Za-z0-9]`.
///
/// Uses the thread-local CSPRNG, so the result is safe to use as a URL path
/// segment without escaping.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
