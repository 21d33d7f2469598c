//! API-facing error type.
//!
//! Every failure is rendered as the JSON envelope
//! `{"status":"ERROR","error":"..."}`. Logical failures keep HTTP 200 so
//! clients branch on the envelope; only authentication failures use a
//! distinct status (401) so browsers and HTTP clients can prompt for
//! credentials.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::envelope::Envelope;
use crate::utils::validation::describe_validation_errors;

/// Challenge sent with 401 responses.
const BASIC_CHALLENGE: &str = "Basic realm=\"url-shortener\"";

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input; never reaches the store.
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },

    #[error("{message}")]
    Unauthorized { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Message placed in the envelope's `error` field.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message }
            | AppError::Unauthorized { message } => message,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(describe_validation_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::error(self.message()));

        match self {
            AppError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(BASIC_CHALLENGE),
                )],
                body,
            )
                .into_response(),
            _ => (StatusCode::OK, body).into_response(),
        }
    }
}
