//! Application layer: link logic over the store trait.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
