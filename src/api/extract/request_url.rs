//! Extractor for the absolute URL of the current request.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
};

use crate::state::AppState;
use crate::utils::request_url::request_url;

/// The absolute URL (scheme, host, port and path) the request was sent to.
///
/// Uses the URI as received by the outermost router, so nested routes still
/// see their full path. Rejects with 400 when the request names no host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(pub String);

impl FromRequestParts<AppState> for RequestUrl {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());

        request_url(&parts.headers, &uri, state.behind_proxy)
            .map(RequestUrl)
            .ok_or(StatusCode::BAD_REQUEST)
    }
}
