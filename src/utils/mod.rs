//! Pure helpers used by the link service and the HTTP layer.
//!
//! - [`identifier`] - Murmur3-based short identifiers
//! - [`url_validator`] - `http`/`https` URL validation
//! - [`request_url`] - Absolute request URL from headers

pub mod identifier;
pub mod request_url;
pub mod url_validator;
