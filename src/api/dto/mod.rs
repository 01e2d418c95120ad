//! Data Transfer Objects for the HTTP API.

pub mod create;
pub mod health;
