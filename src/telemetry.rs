//! Logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `info` if it does not
/// parse); `LOG_FORMAT=json` switches to one JSON object per line.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
