//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::utils::validation::validate_destination;

/// Request to store a destination URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// Destination URL; must be an absolute URL.
    #[serde(default)]
    #[validate(custom(function = "validate_destination"))]
    pub url: String,

    /// Optional alias; generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful creation: the envelope plus the alias that was stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveUrlResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub alias: String,
}

impl SaveUrlResponse {
    pub fn new(alias: String) -> Self {
        Self {
            envelope: Envelope::ok(),
            alias,
        }
    }
}
