//! DTOs for URL entry creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MAX_URL_ADDRESS_LENGTH;
use crate::domain::validation::{no_whitespace_or_control, not_blank};

/// Request to shorten a single URL.
///
/// A missing `urlAddress` deserializes as empty and fails the blank check,
/// so clients always get a validation error instead of a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenUrlRequest {
    #[serde(rename = "urlAddress", default)]
    #[validate(
        custom(function = "not_blank"),
        custom(function = "no_whitespace_or_control"),
        length(
            max = MAX_URL_ADDRESS_LENGTH,
            message = "must have up to 2000 characters"
        ),
        url(message = "must be a valid URL")
    )]
    pub url_address: String,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenUrlResponse {
    #[serde(rename = "urlAlias")]
    pub url_alias: String,
}
