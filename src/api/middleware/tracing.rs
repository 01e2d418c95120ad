//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying the method, path and HTTP
/// version; the response is logged at `INFO` with status and latency. 5xx
/// responses are additionally reported as failures at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api version=HTTP/1.1}: finished processing request latency=1 ms status=201
/// INFO request{method=GET path=/api/83f94a17 version=HTTP/1.1}: finished processing request latency=0 ms status=307
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeRequestSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}
