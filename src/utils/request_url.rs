//! Reconstruction of the absolute URL a request was sent to.

use axum::http::{HeaderMap, Uri, header};

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds `scheme://host[:port]/path` for the request, without the query.
///
/// The host comes from the `Host` header, falling back to the URI authority
/// (HTTP/2 requests carry it there). The scheme comes from the URI and
/// defaults to `http`. When `behind_proxy` is set, `X-Forwarded-Host` and
/// `X-Forwarded-Proto` take precedence; only their first value is used.
///
/// Returns `None` when no host can be determined.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8080".parse().unwrap());
///
/// let url = request_url(&headers, &"/api".parse().unwrap(), false).unwrap();
/// assert_eq!(url, "http://localhost:8080/api");
/// ```
pub fn request_url(headers: &HeaderMap, uri: &Uri, behind_proxy: bool) -> Option<String> {
    let host = behind_proxy
        .then(|| first_forwarded(headers, X_FORWARDED_HOST))
        .flatten()
        .or_else(|| headers.get(header::HOST).and_then(|v| v.to_str().ok()))
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .filter(|h| !h.is_empty())?;

    let scheme = behind_proxy
        .then(|| first_forwarded(headers, X_FORWARDED_PROTO))
        .flatten()
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    Some(format!("{}://{}{}", scheme, host, uri.path()))
}

fn first_forwarded<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
