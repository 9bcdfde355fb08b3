//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`          - Alias redirect
//! - `GET  /health`           - Health check with store status
//! - `POST /api/v1/url_entry` - Shorten a URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Every route of the service with request tracing, without path normalization.
///
/// `/health` is a static route and wins over the `/{alias}` capture.
pub fn service_router(state: AppState) -> Router {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(service_router(state))
}
