//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored destination.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds `302 Found` with a `Location` header on success. Failures are
/// HTTP 200 error envelopes: `Invalid request` (empty alias),
/// `URL not found`, or `Internal error`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    if alias.is_empty() {
        info!("Alias is empty");
        return Err(AppError::bad_request("Invalid request"));
    }

    let destination = state
        .url_service
        .resolve(&alias)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => {
                info!(alias = %alias, "URL not found");
                AppError::not_found("URL not found")
            }
            other => {
                error!(alias = %alias, error = %other, "Failed to get URL");
                AppError::internal("Internal error")
            }
        })?;

    let location = HeaderValue::from_str(&destination).map_err(|e| {
        error!(alias = %alias, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Internal error")
    })?;

    info!(alias = %alias, url = %destination, "Got URL");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
