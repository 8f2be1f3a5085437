// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::recommendation::Recommendation;
use crate::stats::{mean, percentile, std_dev, CostSummary};
use crate::test_helpers::{cost, ms};
use proptest::collection::vec;
use proptest::prelude::*;
use std::time::Duration;

/// Interpolated percentiles go through f64 and are truncated, so they may land one nanosecond
/// below the exact value.
fn assert_close(actual: Duration, expected: Duration) {
    let diff = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(
        diff <= Duration::from_nanos(1),
        "{:?} is not close to {:?}",
        actual,
        expected
    );
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[ms(10), ms(20), ms(30)]), ms(20));
    assert_eq!(mean(&[ms(7)]), ms(7));
    assert_eq!(mean(&[]), Duration::ZERO);
}

#[test]
fn test_mean_truncates() {
    let samples = [Duration::from_nanos(1), Duration::from_nanos(2)];
    assert_eq!(mean(&samples), Duration::from_nanos(1));
}

#[test]
fn test_mean_does_not_overflow_nanos() {
    // The sum exceeds u64::MAX nanoseconds.
    let samples = vec![Duration::from_secs(10_000_000_000); 3];
    assert_eq!(mean(&samples), Duration::from_secs(10_000_000_000));
}

#[test]
fn test_std_dev() {
    let samples = [ms(10), ms(20), ms(30)];
    assert_eq!(std_dev(&samples, mean(&samples)), ms(10));

    let samples = [ms(5), ms(5), ms(5), ms(5)];
    assert_eq!(std_dev(&samples, mean(&samples)), Duration::ZERO);
}

#[test]
fn test_std_dev_single_sample() {
    assert_eq!(std_dev(&[ms(42)], ms(42)), Duration::ZERO);
    assert_eq!(std_dev(&[], Duration::ZERO), Duration::ZERO);
}

#[test]
fn test_percentile_interpolation() {
    let sorted = [ms(10), ms(20), ms(30), ms(40)];
    assert_eq!(percentile(&sorted, 25.0), Duration::from_micros(17_500));
    assert_eq!(percentile(&sorted, 75.0), Duration::from_micros(32_500));
    assert_eq!(percentile(&sorted, 0.0), ms(10));
    assert_eq!(percentile(&sorted, 100.0), ms(40));
}

#[test]
fn test_percentile_single_and_empty() {
    for p in [0.0, 25.0, 75.0, 95.0, 99.0, 100.0] {
        assert_eq!(percentile(&[ms(42)], p), ms(42));
        assert_eq!(percentile(&[], p), Duration::ZERO);
    }
}

#[test]
fn test_percentile_on_order_statistic() {
    // rank = 0.5 * 4 = 2 exactly, so no interpolation takes place.
    let sorted = [ms(1), ms(2), ms(3), ms(4), ms(5)];
    assert_eq!(percentile(&sorted, 50.0), ms(3));
}

#[test]
fn test_summary() {
    let summary = CostSummary::from_samples(cost(10), vec![ms(30), ms(10), ms(20)]);
    assert_eq!(summary.cost, cost(10));
    assert_eq!(summary.sample_count, 3);
    assert_eq!(summary.mean, ms(20));
    assert_eq!(summary.std_dev, ms(10));
    assert_eq!(summary.p25, ms(15));
    assert_eq!(summary.p75, ms(25));
    assert_close(summary.p95, ms(29));
    assert_close(summary.p99, Duration::from_micros(29_800));
    assert_eq!(summary.samples, vec![ms(30), ms(10), ms(20)]);
    assert_eq!(summary.recommendation(), Recommendation::Fast);
}

#[test]
fn test_summary_single_sample() {
    let summary = CostSummary::from_samples(cost(4), vec![ms(42)]);
    assert_eq!(summary.sample_count, 1);
    assert_eq!(summary.mean, ms(42));
    assert_eq!(summary.std_dev, Duration::ZERO);
    assert_eq!(summary.p25, ms(42));
    assert_eq!(summary.p75, ms(42));
    assert_eq!(summary.p95, ms(42));
    assert_eq!(summary.p99, ms(42));
}

#[test]
#[should_panic(expected = "empty sample set")]
fn test_summary_empty() {
    CostSummary::from_samples(cost(4), Vec::new());
}

#[test]
fn test_summary_serialization() {
    let summary = CostSummary::from_samples(cost(12), vec![ms(250), ms(260)]);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["cost"], 12);
    assert_eq!(json["sample_count"], 2);
    assert_eq!(json["mean"], 255_000_000u64);
    assert_eq!(json["samples"][1], 260_000_000u64);

    let deserialized: CostSummary = serde_json::from_value(json).unwrap();
    assert_eq!(deserialized, summary);
}

#[test]
fn test_summary_rejects_serialized_invalid_cost() {
    let mut json = serde_json::to_value(CostSummary::from_samples(cost(12), vec![ms(1)])).unwrap();
    json["cost"] = 40.into();
    assert!(serde_json::from_value::<CostSummary>(json).is_err());
}

fn arb_samples() -> impl Strategy<Value = Vec<Duration>> {
    vec(0u64..10_000_000_000, 1..64)
        .prop_map(|nanos| nanos.into_iter().map(Duration::from_nanos).collect())
}

proptest! {
    #[test]
    fn test_percentiles_are_monotone(samples in arb_samples()) {
        let summary = CostSummary::from_samples(cost(10), samples);
        prop_assert!(summary.p25 <= summary.p75);
        prop_assert!(summary.p75 <= summary.p95);
        prop_assert!(summary.p95 <= summary.p99);
    }

    #[test]
    fn test_summary_within_sample_bounds(samples in arb_samples()) {
        let min = *samples.iter().min().unwrap();
        let max = *samples.iter().max().unwrap();
        let summary = CostSummary::from_samples(cost(10), samples);
        for d in [summary.mean, summary.p25, summary.p75, summary.p95, summary.p99] {
            prop_assert!(min <= d && d <= max);
        }
        prop_assert!(summary.std_dev <= max - min);
    }

    #[test]
    fn test_summary_keeps_sample_order(samples in arb_samples()) {
        let summary = CostSummary::from_samples(cost(10), samples.clone());
        prop_assert_eq!(summary.samples, samples.clone());
        prop_assert_eq!(summary.sample_count, samples.len());
    }
}
