//! Exchange rate snapshots and the provider abstraction

use crate::core::error::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Shown when the upstream payload carries no date.
pub const UNKNOWN_AS_OF: &str = "N/A";

/// Canonical form of a currency code, e.g. ` usd ` to `USD`.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// One fetched set of rates, all expressed against `base`.
///
/// A snapshot is never mutated after construction; a newer fetch produces a
/// new snapshot that replaces the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    base: String,
    as_of: String,
    rates: HashMap<String, f64>,
}

impl RateSnapshot {
    /// Builds a snapshot, pinning the base currency to the identity rate and
    /// dropping entries that are not positive finite numbers.
    pub fn new(base: &str, as_of: &str, mut rates: HashMap<String, f64>) -> Self {
        let base = normalize_code(base);
        rates.retain(|code, rate| {
            let valid = rate.is_finite() && *rate > 0.0;
            if !valid {
                warn!(%base, %code, %rate, "Dropping invalid rate from snapshot");
            }
            valid
        });

        if let Some(rate) = rates.insert(base.clone(), 1.0) {
            if rate != 1.0 {
                warn!(%base, %rate, "Upstream base rate is not 1.0, using identity");
            }
        }

        Self {
            base,
            as_of: as_of.to_string(),
            rates,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Upstream date of the snapshot, passed through as opaque text.
    pub fn as_of(&self) -> &str {
        &self.as_of
    }

    pub fn rates(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.rates.contains_key(currency)
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns the rates for `base`, fetching them if needed.
    async fn get_rates(&self, base: &str) -> Result<Arc<RateSnapshot>, FetchError>;

    /// Drops any cached snapshots so the next call fetches live data.
    async fn refresh(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect()
    }

    #[test]
    fn test_snapshot_includes_base_at_identity() {
        let snapshot = RateSnapshot::new("USD", "2024-01-01", rates(&[("EUR", 0.92)]));
        assert_eq!(snapshot.rate("USD"), Some(1.0));
        assert_eq!(snapshot.rate("EUR"), Some(0.92));
        assert_eq!(snapshot.as_of(), "2024-01-01");
        assert_eq!(snapshot.base(), "USD");
    }

    #[test]
    fn test_snapshot_overrides_non_identity_base_rate() {
        let snapshot = RateSnapshot::new("USD", "2024-01-01", rates(&[("USD", 1.01)]));
        assert_eq!(snapshot.rate("USD"), Some(1.0));
    }

    #[test]
    fn test_snapshot_normalizes_base_code() {
        let snapshot = RateSnapshot::new(" usd", "2024-01-01", rates(&[("EUR", 0.92)]));
        assert_eq!(snapshot.base(), "USD");
        assert_eq!(snapshot.rate("USD"), Some(1.0));
        assert!(!snapshot.contains("usd"));
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" usd\n"), "USD");
        assert_eq!(normalize_code("Eur"), "EUR");
        assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn test_snapshot_drops_invalid_rates() {
        let snapshot = RateSnapshot::new(
            "USD",
            "2024-01-01",
            rates(&[("EUR", 0.92), ("BAD", 0.0), ("NEG", -1.0), ("NAN", f64::NAN)]),
        );
        assert!(snapshot.contains("EUR"));
        assert!(!snapshot.contains("BAD"));
        assert!(!snapshot.contains("NEG"));
        assert!(!snapshot.contains("NAN"));
        assert_eq!(snapshot.rates().len(), 2);
    }
}
