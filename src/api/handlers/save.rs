//! Handler for alias creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info, warn};
use validator::Validate;

use crate::api::dto::url::{SaveUrlRequest, SaveUrlResponse};
use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::is_reserved_alias;

/// Stores a destination URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "example" }
/// ```
///
/// `alias` is optional; when absent or empty a random alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "example" }
/// ```
///
/// # Errors
///
/// All failures are HTTP 200 with an error envelope:
///
/// - `Failed to decode request` - body is not the expected JSON
/// - `Field 'URL' is required` / `Field URL is not a valid URL` - validation
/// - `Invalid request` - alias shadowed by a fixed route (`health`, `url`)
/// - `Failed to save URL` - alias taken or storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "Failed to decode request body");
        AppError::bad_request("Failed to decode request")
    })?;

    info!(url = %request.url, alias = ?request.alias, "Request body decoded");

    if let Err(errors) = request.validate() {
        error!(error = %errors, "Invalid request");
        return Err(errors.into());
    }

    if let Some(alias) = request.alias.as_deref().filter(|a| is_reserved_alias(a)) {
        error!(alias = %alias, "Alias is reserved");
        return Err(AppError::bad_request("Invalid request"));
    }

    let (id, alias) = state
        .url_service
        .shorten(&request.url, request.alias)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(alias) => {
                warn!(alias = %alias, "Alias already exists");
                AppError::conflict("Failed to save URL")
            }
            other => {
                error!(error = %other, "Failed to save URL");
                AppError::internal("Failed to save URL")
            }
        })?;

    info!(id, alias = %alias, "URL saved");

    Ok(Json(SaveUrlResponse::new(alias)))
}
