//! HTTP layer: translates requests into link service calls.
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes
//! - [`extract`] - Custom extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
