//! Handler for link creation endpoint.

use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::create::CreateLinkForm;
use crate::api::extract::RequestUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or re-creates) the short link for a URL.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `url` field:
///
/// ```text
/// url=https%3A%2F%2Fexample.com%2F
/// ```
///
/// # Response
///
/// `201 Created` with no body and a `Location` header pointing at the new
/// link, one path segment under the request URL:
///
/// ```text
/// Location: http://localhost:8080/api/83f94a17
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or not an `http`/`https` URL.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    RequestUrl(request_url): RequestUrl,
    Form(form): Form<CreateLinkForm>,
) -> Result<impl IntoResponse, AppError> {
    // Rejects bad input before the service is reached; the service repeats
    // the check for callers that bypass HTTP, such as the admin CLI.
    form.validate()?;

    let link = state.link_service.create(&form.url).await?;
    let location = link.location_under(&request_url);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}
