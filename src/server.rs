//! HTTP server initialization and runtime setup.
//!
//! Handles store setup and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and cannot be reached.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let store: Arc<dyn LinkStore> = match config.store_backend {
        StoreBackend::Redis => {
            let redis = RedisStore::connect(&config.redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to open Redis store")?;
            tracing::info!("Store: Redis");
            Arc::new(redis)
        }
        StoreBackend::Memory => {
            tracing::warn!("Store: in-memory, links are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis or in-memory)
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let state = AppState::new(store, config.behind_proxy);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
