//! End-to-end scenarios for the signal engine: fetch-shaped input in,
//! full SignalOutput and event log out.

use chrono::NaiveDate;
use smac_core::domain::{PricePoint, PriceSeries};
use smac_core::engine::{compute, ComparisonPolicy, SmacConfig};
use smac_core::error::SignalError;
use smac_core::events::{extract_events, MarkerSource};

fn make_series(prices: &[f64]) -> PriceSeries {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(base + chrono::Duration::days(i as i64), p))
        .collect();
    PriceSeries::new(points).unwrap()
}

fn no_suppress(short: usize, long: usize) -> SmacConfig {
    SmacConfig {
        comparison: ComparisonPolicy::AvgVsAvg {
            suppress_warmup: false,
        },
        ..SmacConfig::new(short, long)
    }
}

#[test]
fn rising_series_short_average_leads() {
    let series = make_series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    let out = compute(&series, &SmacConfig::new(2, 4)).unwrap();

    // Index 3: short = mean(3, 4), long = mean(1, 2, 3, 4).
    assert!((out.short_avg[3] - 3.5).abs() < 1e-9);
    assert!((out.long_avg[3] - 2.5).abs() < 1e-9);
    assert_eq!(out.signal[3], 1);
}

#[test]
fn constant_series_stays_silent() {
    let series = make_series(&[5.0, 5.0, 5.0, 5.0, 5.0]);
    let out = compute(&series, &no_suppress(2, 3)).unwrap();

    assert!(out.short_avg.iter().all(|&v| (v - 5.0).abs() < 1e-9));
    assert!(out.long_avg.iter().all(|&v| (v - 5.0).abs() < 1e-9));
    // Strict inequality: equal averages never signal.
    assert!(out.signal.iter().all(|&s| s == 0));
    assert!(out.crossover.iter().all(|&c| c == 0));

    let log = extract_events(&out, MarkerSource::ShortAvg);
    assert!(log.is_empty());
}

#[test]
fn peak_produces_one_buy_and_one_sell() {
    let series = make_series(&[1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0]);
    let out = compute(&series, &no_suppress(2, 3)).unwrap();

    let buys: Vec<usize> = out
        .crossover
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 1)
        .map(|(i, _)| i)
        .collect();
    let sells: Vec<usize> = out
        .crossover
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == -1)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(buys.len(), 1, "exactly one buy near the peak");
    assert_eq!(sells.len(), 1, "exactly one sell on the way down");
    assert!(buys[0] < sells[0]);

    let log = extract_events(&out, MarkerSource::ShortAvg);
    assert_eq!(log.buys.len(), 1);
    assert_eq!(log.sells.len(), 1);
    assert_eq!(log.buys[0].index, buys[0]);
    assert_eq!(log.sells[0].index, sells[0]);
}

#[test]
fn single_day_series_under_min_periods() {
    let series = make_series(&[100.0]);
    let out = compute(&series, &SmacConfig::new(50, 120)).unwrap();

    assert_eq!(out.len(), 1);
    assert!((out.short_avg[0] - 100.0).abs() < 1e-9);
    assert!((out.long_avg[0] - 100.0).abs() < 1e-9);
    assert_eq!(out.signal[0], 0);
    assert_eq!(out.crossover[0], 0);
    assert!(extract_events(&out, MarkerSource::ShortAvg).is_empty());
}

#[test]
fn empty_fetch_result_is_reported_not_crashed() {
    let series = PriceSeries::new(vec![]).unwrap();
    for (short, long) in [(1, 1), (2, 4), (50, 120)] {
        let err = compute(&series, &SmacConfig::new(short, long)).unwrap_err();
        assert_eq!(err, SignalError::EmptySeries);
    }
}
