//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `POST /`     - Create a short link from a form-encoded `url`
/// - `GET  /{id}` - Redirect to the link's target
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/{id}", get(redirect_handler))
}
