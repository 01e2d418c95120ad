//! Key-value store backends for short links.
//!
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for local runs and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
