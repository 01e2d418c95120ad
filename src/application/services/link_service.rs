//! Link creation and resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::url_validator::is_valid_url;

/// Service for creating and resolving hashed short links.
///
/// The store is injected at construction; the service keeps no other state.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    /// Creates a new link service over `store`.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Validates `target`, derives its identifier and stores the mapping.
    ///
    /// The write is unconditional: an existing mapping under the same
    /// identifier is overwritten, whether it holds the same URL or a colliding
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `target` is not an `http`/`https`
    /// URL; the store is not touched in that case.
    /// Returns [`AppError::Store`] if the write fails.
    pub async fn create(&self, target: &str) -> Result<ShortLink, AppError> {
        if !is_valid_url(target) {
            return Err(AppError::InvalidUrl);
        }

        let link = ShortLink::for_target(target)?;
        self.store.set(&link.id, &link.target).await?;
        debug!("Created short link {} -> {}", link.id, link.target);

        Ok(link)
    }

    /// Looks up the link stored under `id`.
    ///
    /// The identifier is used as-is; its format is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is stored under `id`.
    /// Returns [`AppError::Store`] if the lookup fails.
    pub async fn resolve(&self, id: &str) -> Result<ShortLink, AppError> {
        match self.store.get(id).await? {
            Some(target) => Ok(ShortLink::new(id, target)),
            None => {
                debug!("Short link {} not found", id);
                Err(AppError::not_found(id))
            }
        }
    }

    /// Reports whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLinkStore, StoreError};

    #[tokio::test]
    async fn test_create_writes_hashed_id() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_set()
            .withf(|key, value| key == "83f94a17" && value == "https://example.com/")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        let link = service.create("https://example.com/").await.unwrap();
        assert_eq!(link.id, "83f94a17");
        assert_eq!(link.target, "https://example.com/");
    }

    #[tokio::test]
    async fn test_create_stores_url_verbatim() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_set()
            .withf(|_, value| value == "HTTP://Example.COM/Path?q=1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.create("HTTP://Example.COM/Path?q=1").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_invalid_url_skips_store() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_set().times(0);

        let service = LinkService::new(Arc::new(mock_store));

        for input in [
            "ftp://example.com/",
            "",
            "example.com",
            "http://localhost:3000/",
            "https://example.com/a<b>",
        ] {
            let result = service.create(input).await;
            assert!(matches!(result, Err(AppError::InvalidUrl)));
        }
    }

    #[tokio::test]
    async fn test_create_propagates_store_error() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_set()
            .times(1)
            .returning(|_, _| Err(StoreError::Connection("refused".to_string())));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.create("https://example.com/").await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[tokio::test]
    async fn test_create_same_url_twice_overwrites() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_set()
            .withf(|key, _| key == "f684a3c4")
            .times(2)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        let first = service.create("http://example.com/").await.unwrap();
        let second = service.create("http://example.com/").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get()
            .withf(|key| key == "83f94a17")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/".to_string())));

        let service = LinkService::new(Arc::new(mock_store));

        let link = service.resolve("83f94a17").await.unwrap();
        assert_eq!(link.target, "https://example.com/");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_get().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.resolve("deadbeef").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_does_not_check_id_format() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get()
            .withf(|key| key == "not-a-hex-id")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/".to_string())));

        let service = LinkService::new(Arc::new(mock_store));

        assert!(service.resolve("not-a-hex-id").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_propagates_store_error() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Backend("boom".to_string())));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.resolve("83f94a17").await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[tokio::test]
    async fn test_store_healthy() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_health_check().times(1).returning(|| false);

        let service = LinkService::new(Arc::new(mock_store));

        assert!(!service.store_healthy().await);
    }
}
