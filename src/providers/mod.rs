pub mod caching;
pub mod exchangerate_api;

use crate::core::config::AppConfig;
use crate::core::rates::RateProvider;
use anyhow::{Context, Result};
use caching::CachingRateProvider;
use exchangerate_api::ExchangeRateApiProvider;
use std::sync::Arc;
use tracing::debug;

/// Builds the rate provider described by `config`, wrapping the live
/// provider in a TTL cache when caching is enabled.
pub fn from_config(config: &AppConfig) -> Result<Arc<dyn RateProvider>> {
    let live = ExchangeRateApiProvider::new(&config.provider.base_url, config.provider.timeout())
        .context("Failed to build HTTP client for rate provider")?;

    if config.cache.enabled {
        debug!(ttl = ?config.cache.ttl(), "Rate caching enabled");
        Ok(Arc::new(CachingRateProvider::new(live, config.cache.ttl())))
    } else {
        debug!("Rate caching disabled");
        Ok(Arc::new(live))
    }
}
