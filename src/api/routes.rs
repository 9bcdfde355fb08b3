//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Versioned REST routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /v1/url_entry` - Shorten a URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/v1/url_entry", post(shorten_handler))
}
