//! Price series — the fundamental input unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Adjusted closing price for a single trading day.
///
/// `f64::NAN` is the missing-value marker: absent or non-numeric source
/// values are coerced to NaN at ingestion, never rejected. Rolling
/// computations exclude NaN from the average's denominator; it is never
/// treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Validation failures when constructing a [`PriceSeries`].
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("duplicate date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("dates out of order: {prev} followed by {next}")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },

    #[error("negative price {price} on {date}")]
    NegativePrice { date: NaiveDate, price: f64 },
}

/// Time-ordered daily adjusted closes, one entry per trading day.
///
/// Invariants, enforced at construction: dates strictly increasing (which
/// rules out duplicates), every non-NaN price >= 0. An empty series is a
/// valid value — emptiness is a distinct condition the engine reports as
/// [`SignalError::EmptySeries`](crate::error::SignalError::EmptySeries),
/// not a construction failure.
///
/// Immutable once built; each analysis run owns its own series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a vector of daily points.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for pair in points.windows(2) {
            let (prev, next) = (pair[0].date, pair[1].date);
            if next == prev {
                return Err(SeriesError::DuplicateDate(next));
            }
            if next < prev {
                return Err(SeriesError::OutOfOrder { prev, next });
            }
        }
        for p in &points {
            // NaN compares false here, so missing values pass through.
            if p.price < 0.0 {
                return Err(SeriesError::NegativePrice {
                    date: p.date,
                    price: p.price,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Date column, in series order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Price column, in series order. NaN entries are missing values.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}
