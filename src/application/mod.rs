//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and give HTTP handlers and the
//! admin CLI a single API for the create, resolve and delete flows.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias creation, lookup and removal
//! - [`services::auth_service::AuthService`] - Basic credential verification

pub mod services;
