// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

//! Measure how long an adaptive password hash takes across a range of cost levels, and reduce the
//! timings into statistics that help pick a cost.
//!
//! ```no_run
//! use hashcost::clock::MonotonicClock;
//! use hashcost::cost::CostLevel;
//! use hashcost::hasher::BcryptHasher;
//! use hashcost::sweep::{Sweep, SweepConfig};
//!
//! let config = SweepConfig {
//!     start_cost: CostLevel::new(10).unwrap(),
//!     end_cost: CostLevel::new(12).unwrap(),
//!     iterations: 3,
//!     payload: b"correct-horse-battery-staple",
//! };
//! config.validate().unwrap();
//!
//! let summaries = Sweep::new(BcryptHasher, MonotonicClock::new())
//!     .run(&config)
//!     .unwrap();
//! for summary in summaries {
//!     println!("{}: {:?} ({})", summary.cost, summary.mean, summary.recommendation());
//! }
//! ```

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
pub mod stats_tests;

#[cfg(test)]
#[path = "tests/recommendation_tests.rs"]
pub mod recommendation_tests;

#[cfg(test)]
#[path = "tests/cost_tests.rs"]
pub mod cost_tests;

#[cfg(test)]
#[path = "tests/sweep_tests.rs"]
pub mod sweep_tests;

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
pub mod hasher_tests;

// Measurement seams
pub mod traits;
// Engine
pub mod stats;
pub mod sweep;

// Collaborators and tooling
pub mod clock;
pub mod cost;
pub mod error;
pub mod hasher;
pub mod recommendation;
