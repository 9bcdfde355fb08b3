//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its URL address.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds `302 Found` with the URL in the `Location` header and counts
/// the view.
///
/// # Errors
///
/// Returns 404 Not Found if no entry is assigned to the alias.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url_address = state.alias_service.resolve(&alias).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url_address)]))
}
