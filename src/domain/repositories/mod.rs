//! Storage traits for the domain layer.
//!
//! The trait here is the only seam between link logic and storage.
//! Implementations live in `crate::infrastructure::store`; a `mockall` mock
//! is generated for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use link_store::MockLinkStore;
