//! # hashlink
//!
//! A URL shortener whose short links are derived from the target URL itself.
//!
//! `POST /api` with a form field `url` validates the URL, hashes it with
//! 32-bit MurmurHash3 into an 8-character hex identifier, stores
//! `identifier → url` and answers `201 Created` with the link in `Location`.
//! `GET /api/{id}` answers `307 Temporary Redirect` to the stored URL, or
//! `404 Not Found`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and the store trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, extractors and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! curl -i -d 'url=https://example.com/' http://localhost:8080/api
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::MemoryStore;
    pub use crate::state::AppState;
}
