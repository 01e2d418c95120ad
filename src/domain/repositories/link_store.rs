//! Key-value store contract for identifier → URL mappings.

use async_trait::async_trait;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A string-keyed, string-valued store.
///
/// Persistence, replication and eviction are the backend's concern. Single
/// key reads and writes are expected to be atomic; nothing else is assumed.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis backend
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be reached or fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write does not succeed.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
