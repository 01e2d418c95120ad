//! Syntactic validation of target URLs.
//!
//! Only absolute `http`/`https` URLs are accepted. The host must be an IP
//! literal or a dotted domain name ending in a known public suffix, so
//! `localhost`, single-label names and made-up TLDs are rejected. The path is
//! limited to unreserved and sub-delimiter characters plus `%` escapes. No DNS
//! lookup, no network access.

use std::net::Ipv4Addr;

use url::{Host, Url};
use validator::ValidationError;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Characters allowed in a path besides ASCII letters and digits.
const PATH_PUNCTUATION: &str = "-_:@&=+,.!/~*'%$;()";

const MAX_LABEL_LEN: usize = 63;

/// Returns `true` if `input` is a well-formed `http` or `https` URL.
///
/// # Rules
///
/// 1. The input is non-empty and contains no whitespace or control characters
/// 2. It starts with `<scheme>://`, where the scheme is `http` or `https`
///    (case-insensitive)
/// 3. The path uses only letters, digits and `-_:@&=+,.!/~*'%$;()`, has no
///    empty `//` segment and never climbs above the root with `..`
/// 4. It parses as an absolute URL whose host is a dotted-quad IPv4 address,
///    a bracketed IPv6 address, or a domain under a known public suffix
///
/// The query and fragment are not restricted beyond rule 1.
///
/// # Examples
///
/// ```
/// use hashlink::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/"));
/// assert!(!is_valid_url("ftp://example.com/"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("http://localhost/"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    if input.is_empty()
        || input
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    // The WHATWG parser accepts `http:example.com`; require the authority marker.
    let Some((scheme, rest)) = input.split_once("://") else {
        return false;
    };
    if !ALLOWED_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    {
        return false;
    }

    // The parser percent-encodes what it does not like, so the path is
    // checked on the raw input.
    let (authority, path) = split_authority(rest);
    if !is_valid_path(path) {
        return false;
    }

    let Ok(url) = Url::parse(input) else {
        return false;
    };
    match url.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        // WHATWG also reads `1.2.3` or `0x7f.1` as IPv4; only dotted quads pass.
        Some(Host::Ipv4(_)) => raw_host(authority).parse::<Ipv4Addr>().is_ok(),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Splits the text after `://` into the authority and the path.
fn split_authority(rest: &str) -> (&str, &str) {
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    (authority, &tail[..path_end])
}

/// Host part of an authority, without user info or port.
fn raw_host(authority: &str) -> &str {
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    host.split_once(':').map_or(host, |(host, _)| host)
}

fn is_valid_path(path: &str) -> bool {
    if !path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PATH_PUNCTUATION.contains(c))
    {
        return false;
    }
    if path.contains("//") {
        return false;
    }

    let mut depth = 0usize;
    for segment in path.split('/').skip(1) {
        match segment {
            ".." => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            "" | "." => {}
            _ => depth += 1,
        }
    }
    true
}

/// `domain` is the parser's lowercase ASCII form of the host.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    domain.contains('.')
        && domain.split('.').all(is_valid_label)
        && psl::suffix(domain.as_bytes()).is_some_and(|suffix| suffix.is_known())
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// [`is_valid_url`] in the shape expected by `#[validate(custom(...))]`.
///
/// # Errors
///
/// Returns a `ValidationError` with code `url` if the URL is rejected.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    if is_valid_url(input) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Invalid URL format".into()))
    }
}
