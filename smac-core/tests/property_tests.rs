//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Crossover is the exact first difference of the signal, in {-1, 0, 1}
//! 2. All output columns stay aligned with the input series
//! 3. Recomputation is idempotent — the engine is a pure function
//! 4. MinPeriods output is NaN-free for NaN-free input, with the
//!    documented boundary values at index 0 and index w-1

use chrono::NaiveDate;
use proptest::prelude::*;
use smac_core::domain::{PricePoint, PriceSeries};
use smac_core::engine::{compute, ComparisonPolicy, SmacConfig};
use smac_core::rolling::{rolling_mean, WindowPolicy};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        (10.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0),
        1..200,
    )
}

fn arb_windows() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=60, 1usize..=150)
}

fn arb_comparison() -> impl Strategy<Value = ComparisonPolicy> {
    prop_oneof![
        Just(ComparisonPolicy::AvgVsAvg {
            suppress_warmup: true
        }),
        Just(ComparisonPolicy::AvgVsAvg {
            suppress_warmup: false
        }),
        Just(ComparisonPolicy::PriceVsAvg {
            reference: smac_core::engine::AvgKind::Short
        }),
        Just(ComparisonPolicy::PriceVsAvg {
            reference: smac_core::engine::AvgKind::Long
        }),
    ]
}

fn make_series(prices: &[f64]) -> PriceSeries {
    let base = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(base + chrono::Duration::days(i as i64), p))
        .collect();
    PriceSeries::new(points).unwrap()
}

proptest! {
    /// crossover[i] == signal[i] - signal[i-1] for i >= 1; crossover[0] == 0;
    /// every value lies in {-1, 0, 1}.
    #[test]
    fn crossover_is_signal_first_difference(
        prices in arb_prices(),
        (short, long) in arb_windows(),
        comparison in arb_comparison(),
    ) {
        let series = make_series(&prices);
        let config = SmacConfig { comparison, ..SmacConfig::new(short, long) };
        let out = compute(&series, &config).unwrap();

        prop_assert_eq!(out.crossover[0], 0);
        for i in 1..out.len() {
            let diff = out.signal[i] as i8 - out.signal[i - 1] as i8;
            prop_assert_eq!(out.crossover[i], diff);
            prop_assert!((-1..=1).contains(&out.crossover[i]));
        }
    }

    /// Every output column has the input series' length.
    #[test]
    fn columns_stay_aligned(
        prices in arb_prices(),
        (short, long) in arb_windows(),
    ) {
        let series = make_series(&prices);
        let out = compute(&series, &SmacConfig::new(short, long)).unwrap();

        let n = series.len();
        prop_assert_eq!(out.dates.len(), n);
        prop_assert_eq!(out.price.len(), n);
        prop_assert_eq!(out.short_avg.len(), n);
        prop_assert_eq!(out.long_avg.len(), n);
        prop_assert_eq!(out.signal.len(), n);
        prop_assert_eq!(out.crossover.len(), n);
    }

    /// Recomputing from the same input yields identical output — the
    /// engine holds no hidden state.
    #[test]
    fn recomputation_is_idempotent(
        prices in arb_prices(),
        (short, long) in arb_windows(),
        comparison in arb_comparison(),
    ) {
        let series = make_series(&prices);
        let config = SmacConfig { comparison, ..SmacConfig::new(short, long) };
        let first = compute(&series, &config).unwrap();
        let second = compute(&series, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// MinPeriods boundary values: index 0 is price[0]; index w-1 is the
    /// mean of the first w prices; nothing is NaN for NaN-free input.
    #[test]
    fn min_periods_boundary_values(
        prices in arb_prices(),
        window in 1usize..=60,
    ) {
        let result = rolling_mean(&prices, window, WindowPolicy::MinPeriods).unwrap();

        prop_assert!(result.iter().all(|v| !v.is_nan()));
        prop_assert!((result[0] - prices[0]).abs() < 1e-9);

        if prices.len() >= window {
            let head_mean: f64 =
                prices[..window].iter().sum::<f64>() / window as f64;
            prop_assert!((result[window - 1] - head_mean).abs() < 1e-9);
        }
    }

    /// Strict policy leaves exactly the first w-1 entries undefined for
    /// NaN-free input.
    #[test]
    fn strict_warmup_gap_is_exact(
        prices in arb_prices(),
        window in 1usize..=60,
    ) {
        let result = rolling_mean(&prices, window, WindowPolicy::Strict).unwrap();
        for (i, v) in result.iter().enumerate() {
            prop_assert_eq!(v.is_nan(), i + 1 < window, "index {}", i);
        }
    }
}
