//! Redis-backed link store.

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, error, info};

impl From<RedisError> for StoreError {
    fn from(e: RedisError) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Redis implementation of [`LinkStore`].
///
/// Values are plain strings written with `SET` and no expiry. Connections are
/// reused through a [`ConnectionManager`], which reconnects on its own. Errors
/// are logged and returned to the caller.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every key; empty for none
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(value) => {
                debug!(key, hit = value.is_some(), "Redis GET");
                Ok(value)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.set::<_, _, ()>(&full_key, value).await {
            Ok(()) => {
                debug!("Redis SET: {} -> {}", key, value);
                Ok(())
            }
            Err(e) => {
                error!("Redis SET error for {}: {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
