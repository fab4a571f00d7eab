//! SMAC signal engine — rolling averages, binary signal, crossover series.
//!
//! The source analyses this unifies disagreed on what the binary signal
//! compares: some restate it as short average vs long average, others as
//! raw price vs a single average. Rather than silently picking one, the
//! comparison is an explicit, caller-selected policy.

use serde::{Deserialize, Serialize};

use crate::domain::{PriceSeries, SignalOutput};
use crate::error::SignalError;
use crate::rolling::{rolling_mean, WindowPolicy};

/// Which rolling average the price-vs-average policy compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvgKind {
    Short,
    Long,
}

/// Comparison policy for deriving the binary signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Short average vs long average. With `suppress_warmup` set, the
    /// first `short_window` entries are forced to 0 regardless of the
    /// comparison — the short average has not stabilized yet. Defaults
    /// to on for compatibility with the reference behavior.
    AvgVsAvg { suppress_warmup: bool },
    /// Raw price vs the selected average. No suppression window.
    PriceVsAvg { reference: AvgKind },
}

impl Default for ComparisonPolicy {
    fn default() -> Self {
        ComparisonPolicy::AvgVsAvg {
            suppress_warmup: true,
        }
    }
}

/// Engine configuration for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmacConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub window_policy: WindowPolicy,
    pub comparison: ComparisonPolicy,
}

impl Default for SmacConfig {
    fn default() -> Self {
        Self {
            short_window: 50,
            long_window: 120,
            window_policy: WindowPolicy::default(),
            comparison: ComparisonPolicy::default(),
        }
    }
}

impl SmacConfig {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short_window,
            long_window,
            ..Self::default()
        }
    }

    /// Window validation happens here, before any computation starts.
    fn validate(&self) -> Result<(), SignalError> {
        for window in [self.short_window, self.long_window] {
            if window == 0 {
                return Err(SignalError::InvalidWindow { window });
            }
        }
        Ok(())
    }
}

/// Element-wise strict comparison of two aligned series into a 0/1 signal.
///
/// NaN on either side compares false, so missing values yield 0 rather
/// than an error. Fails with `LengthMismatch` when the series differ in
/// length — that is an upstream bug, not a recoverable condition.
pub fn binary_signal(lhs: &[f64], rhs: &[f64]) -> Result<Vec<u8>, SignalError> {
    if lhs.len() != rhs.len() {
        return Err(SignalError::LengthMismatch {
            left: lhs.len(),
            right: rhs.len(),
        });
    }
    Ok(lhs.iter().zip(rhs).map(|(&a, &b)| u8::from(a > b)).collect())
}

/// First difference of the binary signal: +1 on the day it turns on
/// (buy), -1 on the day it turns off (sell), 0 otherwise. Index 0 has no
/// prior value and is always 0.
pub fn crossover_series(signal: &[u8]) -> Vec<i8> {
    let mut out = vec![0i8; signal.len()];
    for i in 1..signal.len() {
        out[i] = signal[i] as i8 - signal[i - 1] as i8;
    }
    out
}

/// Run the full SMAC computation for one price series.
///
/// Builds a fresh [`SignalOutput`] from scratch on every call; there is
/// no incremental path and no state carried between runs.
pub fn compute(series: &PriceSeries, config: &SmacConfig) -> Result<SignalOutput, SignalError> {
    config.validate()?;
    if series.is_empty() {
        return Err(SignalError::EmptySeries);
    }

    let price = series.prices();
    let short_avg = rolling_mean(&price, config.short_window, config.window_policy)?;
    let long_avg = rolling_mean(&price, config.long_window, config.window_policy)?;

    let mut signal = match config.comparison {
        ComparisonPolicy::AvgVsAvg { .. } => binary_signal(&short_avg, &long_avg)?,
        ComparisonPolicy::PriceVsAvg { reference } => {
            let avg = match reference {
                AvgKind::Short => &short_avg,
                AvgKind::Long => &long_avg,
            };
            binary_signal(&price, avg)?
        }
    };

    if let ComparisonPolicy::AvgVsAvg {
        suppress_warmup: true,
    } = config.comparison
    {
        let cutoff = config.short_window.min(signal.len());
        for s in &mut signal[..cutoff] {
            *s = 0;
        }
    }

    let crossover = crossover_series(&signal);

    Ok(SignalOutput {
        dates: series.dates(),
        price,
        short_avg,
        long_avg,
        signal,
        crossover,
    })
}
