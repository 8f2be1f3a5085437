// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sweeps over a range of cost levels, timing repeated hashes at each level.
//!
//! Trials run one at a time, in order. Concurrent hashing would contend for the CPU and distort
//! the latency being measured. The time a sweep takes grows like `2^cost * iterations`, so the
//! last cost level of a range usually dominates.

use crate::cost::CostLevel;
use crate::error::{HashCostError, HashCostResult, SweepAborted};
use crate::stats::CostSummary;
use crate::traits::{Clock, CostHasher, SweepObserver};
use tracing::{debug, info, warn};

const MAX_RESERVED_SAMPLES: usize = 1024;

/// Parameters of a sweep.
///
/// The sweep does not validate its configuration. Callers should check it with
/// [SweepConfig::validate] first: an inverted range produces no summaries and zero iterations
/// violate the contract of [CostSummary::from_samples].
#[derive(Clone, Copy, Debug)]
pub struct SweepConfig<'a> {
    pub start_cost: CostLevel,
    pub end_cost: CostLevel,
    pub iterations: usize,
    /// The password to hash. Borrowed for the duration of the sweep and never modified.
    pub payload: &'a [u8],
}

impl<'a> SweepConfig<'a> {
    /// Check that the cost range is not inverted and that at least one iteration is requested.
    pub fn validate(&self) -> HashCostResult<()> {
        if self.start_cost > self.end_cost {
            return Err(HashCostError::InvertedCostRange {
                start: self.start_cost.value(),
                end: self.end_cost.value(),
            });
        }
        if self.iterations < 1 {
            return Err(HashCostError::InvalidIterations);
        }
        Ok(())
    }

    /// Number of cost levels covered by this configuration.
    pub fn cost_levels(&self) -> usize {
        CostLevel::range_inclusive(self.start_cost, self.end_cost).count()
    }
}

/// Position of a sweep, handed to the [SweepObserver] before each trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialProgress {
    pub cost: CostLevel,
    /// 1-based index of the trial within its cost level.
    pub iteration: usize,
    pub iterations: usize,
    /// Number of trials started so far in the sweep, including this one. Observers can use it to
    /// animate a spinner.
    pub tick: usize,
}

/// Drives a [CostHasher] over a range of cost levels.
pub struct Sweep<H, C, O = ()> {
    hasher: H,
    clock: C,
    observer: O,
}

impl<H: CostHasher, C: Clock> Sweep<H, C> {
    pub fn new(hasher: H, clock: C) -> Self {
        Self {
            hasher,
            clock,
            observer: (),
        }
    }
}

impl<H: CostHasher, C: Clock, O: SweepObserver> Sweep<H, C, O> {
    /// Replace the observer notified about progress.
    pub fn with_observer<P: SweepObserver>(self, observer: P) -> Sweep<H, C, P> {
        Sweep {
            hasher: self.hasher,
            clock: self.clock,
            observer,
        }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Run the sweep and return one summary per cost level, in ascending cost order.
    ///
    /// If the hasher fails, the sweep stops right away. The error holds the summaries of the cost
    /// levels that completed before the failure; nothing is reported for the failing level.
    pub fn run(&mut self, config: &SweepConfig<'_>) -> Result<Vec<CostSummary>, SweepAborted> {
        let result = self.run_inner(config);
        self.observer.on_finish();
        result
    }

    fn run_inner(&mut self, config: &SweepConfig<'_>) -> Result<Vec<CostSummary>, SweepAborted> {
        let mut summaries = Vec::with_capacity(config.cost_levels());
        let mut tick = 0usize;

        for cost in CostLevel::range_inclusive(config.start_cost, config.end_cost) {
            // The iteration count is unbounded, so only a bounded prefix is reserved up front.
            let mut samples = Vec::with_capacity(config.iterations.min(MAX_RESERVED_SAMPLES));

            for iteration in 1..=config.iterations {
                tick += 1;
                self.observer.on_trial(&TrialProgress {
                    cost,
                    iteration,
                    iterations: config.iterations,
                    tick,
                });

                let start = self.clock.now();
                let outcome = self.hasher.hash(config.payload, cost);
                let elapsed = self.clock.now().saturating_sub(start);

                if let Err(source) = outcome {
                    warn!(
                        "{}: aborting sweep at cost {}, iteration {}/{}: {}",
                        self.hasher.name(),
                        cost,
                        iteration,
                        config.iterations,
                        source
                    );
                    return Err(SweepAborted {
                        cost,
                        iteration,
                        source,
                        completed: summaries,
                    });
                }

                debug!(
                    "{}: cost {}, iteration {}/{} took {:?}",
                    self.hasher.name(),
                    cost,
                    iteration,
                    config.iterations,
                    elapsed
                );
                samples.push(elapsed);
            }

            let summary = CostSummary::from_samples(cost, samples);
            info!(
                "{}: cost {} mean {:?}, std dev {:?} over {} samples ({})",
                self.hasher.name(),
                cost,
                summary.mean,
                summary.std_dev,
                summary.sample_count,
                summary.recommendation()
            );
            self.observer.on_cost_complete(&summary);
            summaries.push(summary);
        }

        Ok(summaries)
    }
}
