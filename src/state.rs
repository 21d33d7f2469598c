//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::infrastructure::persistence::PgUrlRepository;

/// Explicitly constructed context injected into handlers and middleware.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub auth_service: Arc<AuthService>,
    /// Present when the service runs against PostgreSQL; used by health checks.
    pub database: Option<Arc<PgUrlRepository>>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            url_service,
            auth_service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Arc<PgUrlRepository>) -> Self {
        self.database = Some(database);
        self
    }
}
