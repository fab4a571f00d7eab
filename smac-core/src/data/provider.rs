//! Price provider trait and structured error types.
//!
//! The trait abstracts over data sources (Yahoo Finance, CSV import) so the
//! CLI can swap implementations and tests can mock the boundary. Retries,
//! rate limiting, and caching are the collaborator's business, not this
//! crate's — a failed fetch propagates immediately.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{PriceSeries, SeriesError};

/// Structured errors for the market-data boundary.
///
/// Designed to be displayed directly at the CLI; all variants mean the
/// requested data is unavailable, with enough detail to say why.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("csv import failed: {0}")]
    Csv(String),

    /// The provider returned rows that violate the series invariants
    /// (out-of-order or duplicate dates, negative prices).
    #[error("invalid series from provider: {0}")]
    InvalidSeries(#[from] SeriesError),
}

/// Trait for daily adjusted-close providers.
///
/// A valid symbol with no trading days in the requested range yields an
/// empty `PriceSeries`, not an error — callers must treat emptiness as a
/// distinct condition.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily adjusted closes for a symbol over a date range
    /// (inclusive on both ends).
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError>;
}
