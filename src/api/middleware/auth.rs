//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Basic credentials from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if:
/// - Authorization header is missing or not Basic
/// - User or password does not match the configured credentials
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::info!("Authorization header is missing or invalid");
            AppError::unauthorized("Unauthorized")
        })?;

    if let Err(err) = st
        .auth_service
        .authenticate(&user, password.as_deref().unwrap_or_default())
    {
        tracing::warn!(user = %user, "Rejected Basic credentials");
        return Err(err);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
