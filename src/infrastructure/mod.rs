//! Infrastructure layer: concrete store backends.
//!
//! - [`store`] - Redis and in-memory implementations of
//!   [`crate::domain::repositories::LinkStore`]

pub mod store;
