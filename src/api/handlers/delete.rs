//! Handler for alias removal.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::envelope::Envelope;
use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Basic auth)
///
/// Deleting an alias twice reports `URL not found` the second time.
///
/// # Errors
///
/// HTTP 200 error envelopes: `Invalid request` (empty alias),
/// `URL not found`, or `Failed to delete URL`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    if alias.is_empty() {
        info!("Alias is empty");
        return Err(AppError::bad_request("Invalid request"));
    }

    state
        .url_service
        .remove(&alias)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => {
                info!(alias = %alias, "URL not found");
                AppError::not_found("URL not found")
            }
            other => {
                error!(alias = %alias, error = %other, "Failed to delete URL");
                AppError::internal("Failed to delete URL")
            }
        })?;

    info!(alias = %alias, "URL deleted");

    Ok(Json(Envelope::ok()))
}
