//! Handler for URL entry creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenUrlRequest, ShortenUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short URL of a long URL, creating its entry on first use.
///
/// # Endpoint
///
/// `POST /api/v1/url_entry`
///
/// # Request Body
///
/// ```json
/// { "urlAddress": "http://url.test.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "urlAlias": "http://localhost:8080/928e4e" }
/// ```
///
/// Repeated requests for the same URL return the same short URL.
///
/// # Errors
///
/// - 400 Bad Request if the body is not a JSON object with a string `urlAddress`
/// - 400 Bad Request if the URL is blank, contains whitespace, is too long or is malformed
/// - 503 Service Unavailable if no unique alias could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenUrlResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body.",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let alias = state.alias_service.shorten(&payload.url_address).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenUrlResponse {
            url_alias: state.short_url(&alias),
        }),
    ))
}
