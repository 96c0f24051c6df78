//! Error types returned by the rate provider and conversion service.

/// Failure to obtain a rate snapshot from the upstream API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Base currency must not be empty")]
    EmptyBaseCurrency,

    #[error("Request error for base currency {base}: {source}")]
    Request {
        base: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} for base currency: {base}")]
    Status {
        base: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse rates response for {base}: {reason}")]
    Malformed { base: String, reason: String },
}

/// Failure of a single conversion service operation.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Currency {0} not found")]
    UnknownCurrency(String),

    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(f64),
}
