use std::sync::Arc;

use tracing::info;

use super::ResolverConfig;
use crate::backend::{HttpBackend, VendorBackend};
use crate::resolver::{ResolverCache, VendorProductResolver};

/// Owns the resolver and the collaborators it was wired with.
///
/// Every clone of `resolver` shares the same cache, so the whole system
/// coalesces duplicate resolutions.
pub struct ResolverSystem {
    pub resolver: VendorProductResolver,
    pub config: ResolverConfig,
}

impl ResolverSystem {
    /// Wires the resolver to the HTTP backend at `config.api_url`.
    pub fn new(config: ResolverConfig) -> Self {
        let backend = Arc::new(HttpBackend::new(config.api_url.clone()));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: ResolverConfig, backend: Arc<dyn VendorBackend>) -> Self {
        info!(api_url = %config.api_url, listing_limit = config.listing_limit, "Starting resolver system");
        let resolver = VendorProductResolver::new(backend, ResolverCache::new(), config.settings());
        Self { resolver, config }
    }

    /// Number of resolutions still running.
    pub fn in_flight(&self) -> usize {
        self.resolver.cache().pending_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VendorProductId;
    use crate::mock_framework::{create_mock_backend, expect_list};
    use serde_json::json;

    #[tokio::test]
    async fn test_system_uses_configured_listing_limit() {
        let (backend, mut receiver) = create_mock_backend(10);
        let config = ResolverConfig {
            listing_limit: 25,
            ..ResolverConfig::default()
        };
        let system = ResolverSystem::with_backend(config, backend);

        let resolver = system.resolver.clone();
        let task = tokio::spawn(async move { resolver.resolve(4, 9).await });

        let (limit, responder) = expect_list(&mut receiver).await.expect("Expected List");
        assert_eq!(limit, 25);
        assert_eq!(system.in_flight(), 1);
        responder.send(Ok(json!([{ "id": 80, "baseProductId": 4, "designId": 9 }]))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(VendorProductId(80)));
        assert_eq!(system.in_flight(), 0);
    }
}
