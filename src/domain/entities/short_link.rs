//! Short link entity: an identifier and the URL it redirects to.

use std::io;

use crate::utils::identifier::short_id;

/// A stored identifier → target URL mapping.
///
/// The entity has no identity beyond its key-value pair. It is never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub target: String,
}

impl ShortLink {
    /// Creates a link from an already known identifier and target.
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }

    /// Creates a link for `target`, deriving the identifier from its hash.
    pub fn for_target(target: impl Into<String>) -> io::Result<Self> {
        let target = target.into();
        Ok(Self {
            id: short_id(&target)?,
            target,
        })
    }

    /// Absolute URL of this link under `request_url`, the URL the link was
    /// created through.
    pub fn location_under(&self, request_url: &str) -> String {
        format!("{}/{}", request_url.trim_end_matches('/'), self.id)
    }
}
