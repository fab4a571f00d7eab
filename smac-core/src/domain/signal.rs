//! Signal output — the aligned, column-oriented result of one analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Computed output of the signal engine, one row per input trading day.
///
/// All columns have the same length as the input series. `f64::NAN` marks
/// an undefined average (strict-window warmup, or a window of all-missing
/// prices).
///
/// Rebuilt in full on every invocation — there is no incremental update
/// path — and owned exclusively by the caller that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub dates: Vec<NaiveDate>,
    /// Echo of the input adjusted closes, for overlay rendering.
    pub price: Vec<f64>,
    pub short_avg: Vec<f64>,
    pub long_avg: Vec<f64>,
    /// 1 while the configured comparison holds, 0 otherwise.
    pub signal: Vec<u8>,
    /// First difference of `signal`: +1 buy, -1 sell, 0 no change.
    /// Index 0 has no prior value and is always 0 — never a trade event.
    pub crossover: Vec<i8>,
}

impl SignalOutput {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
