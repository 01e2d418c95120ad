#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use hashlink::api::handlers::{health_handler, redirect_handler, shorten_handler};
use hashlink::domain::repositories::{LinkStore, StoreError, StoreResult};
use hashlink::infrastructure::store::MemoryStore;
use hashlink::state::AppState;
use std::sync::Arc;

pub const HOST: &str = "localhost:8080";

/// A store whose every operation fails, as if the backend were down.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> (AppState, MemoryStore) {
    let store = MemoryStore::new();
    let state = AppState::new(Arc::new(store.clone()), false);
    (state, store)
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore), false)
}

/// The link routes mounted the way the service mounts them.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api", post(shorten_handler))
        .route("/api/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
