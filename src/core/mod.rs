//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod conversion;
pub mod error;
pub mod log;
pub mod metadata;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::{ConversionResult, ConversionService, PopularRates, RateQuote};
pub use error::{ConversionError, FetchError};
pub use rates::{RateProvider, RateSnapshot};
