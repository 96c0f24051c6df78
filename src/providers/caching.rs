use crate::core::cache::Cache;
use crate::core::error::FetchError;
use crate::core::rates::{RateProvider, RateSnapshot};
use crate::store::MemoryCache;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Caches successful snapshots from `inner` per base currency for `ttl`.
///
/// Failed fetches are never cached. The cache lock is not held while the
/// inner provider is fetching, so concurrent misses for the same base may
/// each issue a request; the last one to finish wins.
pub struct CachingRateProvider<T: RateProvider> {
    inner: T,
    ttl: Duration,
    cache: MemoryCache<String, Arc<RateSnapshot>>,
}

impl<T: RateProvider> CachingRateProvider<T> {
    pub fn new(inner: T, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: MemoryCache::new(),
        }
    }
}

#[async_trait]
impl<T: RateProvider> RateProvider for CachingRateProvider<T> {
    async fn get_rates(&self, base: &str) -> Result<Arc<RateSnapshot>, FetchError> {
        let key = base.to_string();
        if let Some(snapshot) = self.cache.get(&key).await {
            debug!("Cache hit for rates: {}", base);
            return Ok(snapshot);
        }

        debug!("Cache miss for rates: {}", base);
        let snapshot = self.inner.get_rates(base).await?;
        self.cache
            .put(key, Arc::clone(&snapshot), Some(self.ttl))
            .await;
        Ok(snapshot)
    }

    async fn refresh(&self) {
        debug!("Invalidating all cached rates");
        self.cache.clear().await;
        self.inner.refresh().await;
    }
}
