//! CLI administration tool for hashlink.
//!
//! Talks to the configured store directly, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Print the identifier a URL would get (no store access)
//! cargo run --bin admin -- hash https://example.com/
//!
//! # Create a short link
//! cargo run --bin admin -- shorten https://example.com/
//!
//! # Look up a short link
//! cargo run --bin admin -- resolve 83f94a17
//!
//! # Check store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `REDIS_URL` or `REDIS_HOST`..., and
//! `REDIS_KEY_PREFIX`. See `hashlink::config`.

use hashlink::AppError;
use hashlink::application::services::LinkService;
use hashlink::config::{self, Config};
use hashlink::server::connect_store;
use hashlink::utils::identifier::short_id;
use hashlink::utils::url_validator::is_valid_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing hashlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identifier for a URL without touching the store
    Hash {
        /// Target URL
        url: String,
    },

    /// Create a short link
    Shorten {
        /// Target URL (http or https)
        url: String,

        /// Public base of the API, used to print the full short URL
        #[arg(short, long, default_value = "http://localhost:8080/api")]
        base_url: String,
    },

    /// Show the target URL stored under an identifier
    Resolve {
        /// Short link identifier
        id: String,
    },

    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { url } => print_hash(&url)?,
        Commands::Shorten { url, base_url } => {
            let (service, _) = open_service().await?;
            shorten(&service, &url, &base_url).await?
        }
        Commands::Resolve { id } => {
            let (service, _) = open_service().await?;
            resolve(&service, &id).await?
        }
        Commands::Check => {
            let (service, config) = open_service().await?;
            check(&service, &config).await?
        }
    }

    Ok(())
}

async fn open_service() -> Result<(LinkService, Config)> {
    let config = config::load_from_env().context("Invalid configuration")?;
    let store = connect_store(&config)
        .await
        .with_context(|| format!("Failed to open {} store", config.store_backend))?;
    Ok((LinkService::new(store), config))
}

fn print_hash(url: &str) -> Result<()> {
    let id = short_id(url).context("Failed to hash URL")?;
    println!("{}", id.bright_yellow().bold());

    if !is_valid_url(url) {
        println!(
            "{}",
            "Note: this URL would be rejected by the service".yellow()
        );
    }

    Ok(())
}

async fn shorten(service: &LinkService, url: &str, base_url: &str) -> Result<()> {
    match service.create(url).await {
        Ok(link) => {
            println!("{}", "Short link created".green().bold());
            println!("  Id:     {}", link.id.bright_yellow());
            println!("  Target: {}", link.target.cyan());
            println!("  URL:    {}", link.location_under(base_url).bright_white());
            Ok(())
        }
        Err(AppError::InvalidUrl) => {
            anyhow::bail!("'{}' is not a valid http/https URL", url)
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create short link: {}", e)),
    }
}

async fn resolve(service: &LinkService, id: &str) -> Result<()> {
    match service.resolve(id).await {
        Ok(link) => {
            println!("{} -> {}", link.id.bright_yellow(), link.target.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No short link stored under '{}'", id).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve short link: {}", e)),
    }
}

async fn check(service: &LinkService, config: &Config) -> Result<()> {
    if service.store_healthy().await {
        println!(
            "{}",
            format!("Store ({}) is reachable", config.store_backend)
                .green()
                .bold()
        );
        Ok(())
    } else {
        anyhow::bail!("Store ({}) is not reachable", config.store_backend)
    }
}
