use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::error::FetchError;
use crate::core::rates::{RateProvider, RateSnapshot, UNKNOWN_AS_OF};

/// Fetches live rates from an exchangerate-api.com compatible endpoint,
/// `GET {base_url}/{BASE}`.
pub struct ExchangeRateApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("xrate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    date: Option<String>,
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "LatestRatesFetch", skip(self), fields(base = %base))]
    async fn get_rates(&self, base: &str) -> Result<Arc<RateSnapshot>, FetchError> {
        if base.trim().is_empty() {
            return Err(FetchError::EmptyBaseCurrency);
        }

        let url = format!("{}/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    base: base.to_string(),
                    source,
                })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                base: base.to_string(),
                status: response.status(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                base: base.to_string(),
                source,
            })?;

        let data: LatestRatesResponse =
            serde_json::from_str(&text).map_err(|e| FetchError::Malformed {
                base: base.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(echoed) = data.base.as_deref() {
            if !echoed.eq_ignore_ascii_case(base) {
                debug!(%echoed, "Upstream echoed a different base currency");
            }
        }

        let as_of = data.date.as_deref().unwrap_or(UNKNOWN_AS_OF);
        debug!(%as_of, count = data.rates.len(), "Received exchange rates");
        Ok(Arc::new(RateSnapshot::new(base, as_of, data.rates)))
    }
}
