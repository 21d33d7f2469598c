//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Alias redirect (public)
//! - `GET    /health`       - Health check (public)
//! - `POST   /url`          - Create alias (Basic auth)
//! - `DELETE /url/{alias}`  - Delete alias (Basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured timeout get 408
//! - **Panic recovery** - A panicking handler yields the `Internal error` envelope
//! - **Authentication** - Basic credentials on `/url` routes

use std::any::Any;
use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling time for a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let url_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(tracing::layer())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    ::tracing::error!(panic = %details, "Handler panicked");

    AppError::internal("Internal error").into_response()
}
