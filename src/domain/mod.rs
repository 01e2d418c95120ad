//! Domain layer: the short link entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a concrete store.

pub mod entities;
pub mod repositories;
