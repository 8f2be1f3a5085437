// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::cost::CostLevel;
use crate::error::HashCostResult;
use crate::stats::CostSummary;
use crate::sweep::TrialProgress;
use std::time::Duration;

/// Trait implemented by adaptive password hashes whose running time is controlled by a cost
/// parameter.
///
/// Implementations must not cache results: hashing the same payload twice at the same cost must
/// do the full amount of work both times, otherwise timings are meaningless.
pub trait CostHasher {
    /// The hash produced. A sweep only measures how long it takes to compute and drops it.
    type Output;

    /// Name of the hash, used in logs.
    fn name(&self) -> &'static str;

    /// Hash `payload` at the given cost.
    fn hash(&mut self, payload: &[u8], cost: CostLevel) -> HashCostResult<Self::Output>;
}

/// Source of monotonic time.
pub trait Clock {
    /// Time elapsed since some fixed, clock specific origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Receives progress notifications from a running sweep.
///
/// Callbacks run outside the timed region of a trial, so an observer never affects the measured
/// durations. All methods default to doing nothing.
pub trait SweepObserver {
    /// Called right before a trial starts.
    fn on_trial(&mut self, _progress: &TrialProgress) {}

    /// Called when all trials of a cost level are done and reduced.
    fn on_cost_complete(&mut self, _summary: &CostSummary) {}

    /// Called once when the sweep ends, whether it completed or was aborted.
    fn on_finish(&mut self) {}
}

impl SweepObserver for () {}

impl<O: SweepObserver> SweepObserver for Option<O> {
    fn on_trial(&mut self, progress: &TrialProgress) {
        if let Some(observer) = self {
            observer.on_trial(progress);
        }
    }

    fn on_cost_complete(&mut self, summary: &CostSummary) {
        if let Some(observer) = self {
            observer.on_cost_complete(summary);
        }
    }

    fn on_finish(&mut self) {
        if let Some(observer) = self {
            observer.on_finish();
        }
    }
}
