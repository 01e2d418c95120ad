//! Core domain entities.
//!
//! - [`ShortLink`] - An identifier and the target URL it resolves to

pub mod short_link;

pub use short_link::ShortLink;
