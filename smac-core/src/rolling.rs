//! Rolling arithmetic mean over a daily price column.
//!
//! Two boundary policies exist in the wild for the start of the series;
//! both are supported and the caller picks one explicitly.

use serde::{Deserialize, Serialize};

use crate::error::SignalError;

/// How partial windows at the start of the series are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Average over however many samples have elapsed (minimum period of
    /// one day). Entry 0 equals the first price. Missing values are
    /// excluded from the denominator within their window.
    #[default]
    MinPeriods,
    /// Leave the first `window - 1` entries undefined (NaN). A full
    /// window containing any missing value is itself undefined.
    Strict,
}

/// Rolling mean of `prices` over a trailing `window`, inclusive of the
/// current day. Output length always equals input length.
///
/// Pure function: no side effects, no hidden state. Fails with
/// `InvalidWindow` for a zero window (before touching the data) and
/// `EmptySeries` for an empty input.
pub fn rolling_mean(
    prices: &[f64],
    window: usize,
    policy: WindowPolicy,
) -> Result<Vec<f64>, SignalError> {
    if window == 0 {
        return Err(SignalError::InvalidWindow { window });
    }
    if prices.is_empty() {
        return Err(SignalError::EmptySeries);
    }

    let n = prices.len();
    let mut out = vec![f64::NAN; n];

    for i in 0..n {
        let lo = (i + 1).saturating_sub(window);
        let slice = &prices[lo..=i];
        match policy {
            WindowPolicy::MinPeriods => {
                let mut sum = 0.0;
                let mut count = 0usize;
                for &p in slice {
                    if !p.is_nan() {
                        sum += p;
                        count += 1;
                    }
                }
                // A window of all-missing values stays NaN.
                if count > 0 {
                    out[i] = sum / count as f64;
                }
            }
            WindowPolicy::Strict => {
                if i + 1 < window || slice.iter().any(|p| p.is_nan()) {
                    continue;
                }
                out[i] = slice.iter().sum::<f64>() / window as f64;
            }
        }
    }

    Ok(out)
}
