// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Advisory classification of a cost level by the mean time a single hash takes.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Fast,
    Balanced,
    Acceptable,
    Slow,
    TooSlow,
}

/// Upper bounds (exclusive) of every band except the last, in ascending order.
const BANDS: [(Duration, Recommendation); 4] = [
    (Duration::from_millis(100), Recommendation::Fast),
    (Duration::from_millis(250), Recommendation::Balanced),
    (Duration::from_millis(500), Recommendation::Acceptable),
    (Duration::from_secs(1), Recommendation::Slow),
];

impl Recommendation {
    /// Classify a mean hashing time. The first band whose upper bound is strictly above `mean`
    /// wins; anything from one second up is [Recommendation::TooSlow].
    pub fn for_mean(mean: Duration) -> Self {
        BANDS
            .iter()
            .find(|(bound, _)| mean < *bound)
            .map(|(_, recommendation)| *recommendation)
            .unwrap_or(Recommendation::TooSlow)
    }

    /// Short label of the band.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Fast => "fast",
            Recommendation::Balanced => "balanced",
            Recommendation::Acceptable => "acceptable",
            Recommendation::Slow => "slow",
            Recommendation::TooSlow => "too slow",
        }
    }

    /// One line of advice for an operator choosing this cost.
    pub fn advice(&self) -> &'static str {
        match self {
            Recommendation::Fast => "Fast - consider higher cost for sensitive data",
            Recommendation::Balanced => "Good - balanced security and performance",
            Recommendation::Acceptable => "Acceptable - may impact UX under load",
            Recommendation::Slow => "Slow - may cause timeouts under load",
            Recommendation::TooSlow => "Too slow - not recommended for production",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
