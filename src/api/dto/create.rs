//! Form accepted by the link creation endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// `application/x-www-form-urlencoded` body of `POST /api`.
///
/// A missing `url` field deserializes to an empty string and fails
/// validation like any other invalid URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkForm {
    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}
