#![allow(dead_code)]

use alias_shortener::application::services::{AuthService, UrlService};
use alias_shortener::infrastructure::persistence::MemoryUrlRepository;
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;

pub const AUTH_USER: &str = "admin";
pub const AUTH_PASSWORD: &str = "admin";

/// `Authorization` value for `admin:admin`.
pub const VALID_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

/// `Authorization` value for `admin:wrong`.
pub const WRONG_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

pub const ALIAS_LENGTH: usize = 6;

pub fn create_test_state(repo: Arc<MemoryUrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(repo, ALIAS_LENGTH));
    let auth_service = Arc::new(AuthService::new(AUTH_USER, AUTH_PASSWORD));

    AppState::new(url_service, auth_service)
}

/// Full router backed by a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = create_test_state(repo.clone());
    let app = app_router(state, Duration::from_secs(4));

    (TestServer::new(app).unwrap(), repo)
}
