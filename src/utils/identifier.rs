//! Deterministic short identifiers derived from the target URL.
//!
//! Identifiers are the MurmurHash3 (x86, 32-bit, seed 0) of the URL's UTF-8
//! bytes, rendered as the lowercase hex of the hash's little-endian bytes.
//! The same URL always yields the same identifier on every instance, so no
//! coordination with the store is needed. Distinct URLs may collide; a
//! collision overwrites the earlier mapping.

use std::io::{self, Cursor};

/// Length of every identifier produced by [`short_id`].
pub const ID_LENGTH: usize = 8;

/// Computes the short identifier for a URL.
///
/// # Examples
///
/// ```
/// use hashlink::utils::identifier::short_id;
///
/// assert_eq!(short_id("https://example.com/").unwrap(), "83f94a17");
/// ```
///
/// # Errors
///
/// Returns an error only if the hasher fails to read its input, which an
/// in-memory cursor does not do.
pub fn short_id(url: &str) -> io::Result<String> {
    let hash = murmur3::murmur3_32(&mut Cursor::new(url.as_bytes()), 0)?;
    Ok(hex::encode(hash.to_le_bytes()))
}
