//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Trust X-Forwarded-* headers when building request URLs.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>, behind_proxy: bool) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
            behind_proxy,
        }
    }
}
