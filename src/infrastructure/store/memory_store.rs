//! In-process link store.

use crate::domain::repositories::{LinkStore, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// A [`LinkStore`] backed by a concurrent map.
///
/// Contents live as long as the process. Clones share the same map.
///
/// # Use Cases
///
/// - Local development without Redis (`STORE_BACKEND=memory`)
/// - Handler and integration tests
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore");
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
