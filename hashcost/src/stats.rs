// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Reduction of timing samples into summary statistics.
//!
//! Sums and means are computed on integer nanoseconds. Only the standard deviation and the
//! percentile interpolation go through `f64`, and their results are truncated back to whole
//! nanoseconds.

use crate::cost::CostLevel;
use crate::recommendation::Recommendation;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationNanoSeconds};
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// The percentiles reported for every cost level.
pub const REPORTED_PERCENTILES: [f64; 4] = [25.0, 75.0, 95.0, 99.0];

/// Summary of the samples collected for a single cost level.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    pub cost: CostLevel,
    pub sample_count: usize,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub mean: Duration,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub std_dev: Duration,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub p25: Duration,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub p75: Duration,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub p95: Duration,
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub p99: Duration,
    /// The raw samples in the order they were measured.
    #[serde_as(as = "Vec<DurationNanoSeconds<u64>>")]
    pub samples: Vec<Duration>,
}

impl CostSummary {
    /// Reduce the samples measured at `cost`. The given samples are kept in their original order;
    /// percentiles are computed on a sorted copy.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty. A sweep always measures at least one sample per cost level.
    pub fn from_samples(cost: CostLevel, samples: Vec<Duration>) -> Self {
        assert!(!samples.is_empty(), "cannot summarize an empty sample set");

        let mut sorted = samples.clone();
        sorted.sort_unstable();

        let mean = mean(&sorted);
        let std_dev = std_dev(&sorted, mean);
        let [p25, p75, p95, p99] = REPORTED_PERCENTILES.map(|p| percentile(&sorted, p));

        Self {
            cost,
            sample_count: samples.len(),
            mean,
            std_dev,
            p25,
            p75,
            p95,
            p99,
            samples,
        }
    }

    /// The advisory classification of this cost level, based on its mean.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_mean(self.mean)
    }
}

/// Arithmetic mean of the samples. The sum is taken in nanoseconds and divided last, truncating.
/// Returns zero for an empty slice.
pub fn mean(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    duration_from_nanos(total / samples.len() as u128)
}

/// Bessel-corrected sample standard deviation around `mean`. Zero if there are fewer than two
/// samples.
pub fn std_dev(samples: &[Duration], mean: Duration) -> Duration {
    if samples.len() < 2 {
        return Duration::ZERO;
    }

    let mean = mean.as_nanos() as i128;
    let sum_squares: f64 = samples
        .iter()
        .map(|d| {
            let diff = (d.as_nanos() as i128 - mean) as f64;
            diff * diff
        })
        .sum();

    let variance = sum_squares / (samples.len() - 1) as f64;
    Duration::from_nanos(variance.sqrt() as u64)
}

/// The `p`-th percentile of an ascending sorted slice, interpolating linearly between the two
/// closest order statistics. `p` must be in [0, 100]. Returns zero for an empty slice.
pub fn percentile(sorted: &[Duration], p: f64) -> Duration {
    debug_assert!((0.0..=100.0).contains(&p));
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    match sorted.len() {
        0 => Duration::ZERO,
        1 => sorted[0],
        n => {
            let rank = (p / 100.0) * (n - 1) as f64;
            let lower = rank as usize;
            let upper = lower + 1;
            if upper >= n {
                return sorted[n - 1];
            }

            let weight = rank - lower as f64;
            let interpolated = sorted[lower].as_nanos() as f64 * (1.0 - weight)
                + sorted[upper].as_nanos() as f64 * weight;
            Duration::from_nanos(interpolated as u64)
        }
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    Duration::new(
        (nanos / NANOS_PER_SEC) as u64,
        (nanos % NANOS_PER_SEC) as u32,
    )
}
