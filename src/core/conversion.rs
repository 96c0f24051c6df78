//! Currency conversion on top of a [`RateProvider`].
use crate::core::error::ConversionError;
use crate::core::metadata;
use crate::core::rates::{RateProvider, normalize_code};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Outcome of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted_amount: f64,
    pub rate: f64,
    pub as_of: String,
}

impl ConversionResult {
    /// Derived display value `1 / rate`. This is not an upstream quote for
    /// the reverse pair.
    pub fn inverse_rate(&self) -> f64 {
        1.0 / self.rate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub currency: String,
    pub rate: f64,
}

/// Rates of a chosen set of currencies against one base.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularRates {
    pub base: String,
    pub as_of: String,
    pub quotes: Vec<RateQuote>,
}

/// Converts amounts and lists rates using snapshots from a provider.
///
/// The service is stateless; any caching lives in the provider it wraps.
#[derive(Clone)]
pub struct ConversionService {
    provider: Arc<dyn RateProvider>,
}

impl ConversionService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Converts `amount` from `from` to `to` using the latest `from` snapshot.
    ///
    /// Codes are matched case-insensitively. Same-currency conversions still
    /// fetch the snapshot so that unknown codes are rejected, then always use
    /// a rate of exactly 1.0.
    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, ConversionError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConversionError::InvalidAmount(amount));
        }

        let (from, to) = (normalize_code(from), normalize_code(to));
        let snapshot = self.provider.get_rates(&from).await?;

        let rate = if from == to {
            1.0
        } else {
            snapshot
                .rate(&to)
                .ok_or_else(|| ConversionError::UnknownCurrency(to.clone()))?
        };
        debug!(%from, %to, %rate, "Resolved conversion rate");

        let converted_amount = amount * rate;
        if !converted_amount.is_finite() {
            return Err(ConversionError::InvalidAmount(amount));
        }

        Ok(ConversionResult {
            amount,
            from,
            to,
            converted_amount,
            rate,
            as_of: snapshot.as_of().to_string(),
        })
    }

    /// Returns the rates of `currencies` against `base`, in the given order.
    /// Currencies missing from the snapshot, and `base` itself, are skipped.
    pub async fn list_popular_rates<S: AsRef<str>>(
        &self,
        base: &str,
        currencies: &[S],
    ) -> Result<PopularRates, ConversionError> {
        let snapshot = self.provider.get_rates(&normalize_code(base)).await?;

        let quotes = currencies
            .iter()
            .map(|currency| normalize_code(currency.as_ref()))
            .filter(|currency| currency != snapshot.base())
            .filter_map(|currency| {
                snapshot
                    .rate(&currency)
                    .map(|rate| RateQuote { currency, rate })
            })
            .collect();

        Ok(PopularRates {
            base: snapshot.base().to_string(),
            as_of: snapshot.as_of().to_string(),
            quotes,
        })
    }

    /// Sorted codes of every currency quoted against `base`, including `base`.
    pub async fn list_all_currencies(&self, base: &str) -> Result<Vec<String>, ConversionError> {
        let snapshot = self.provider.get_rates(&normalize_code(base)).await?;

        let mut codes: BTreeSet<String> = snapshot.rates().keys().cloned().collect();
        codes.insert(snapshot.base().to_string());
        Ok(codes.into_iter().collect())
    }

    pub fn lookup_symbol(code: &str) -> &str {
        metadata::lookup_symbol(code)
    }

    pub fn lookup_display_name(code: &str) -> &str {
        metadata::lookup_display_name(code)
    }

    /// Forces the next lookups to fetch fresh rates.
    pub async fn refresh(&self) {
        self.provider.refresh().await;
    }
}
