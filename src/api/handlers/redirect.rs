//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short link identifier to its target URL.
///
/// # Endpoint
///
/// `GET /api/{id}`
///
/// The identifier is looked up as given, without format checks.
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the stored URL and no body.
///
/// # Errors
///
/// Returns 404 Not Found if nothing is stored under `id`.
/// Returns 500 Internal Server Error if the store lookup fails.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&id).await?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, link.target)]))
}
