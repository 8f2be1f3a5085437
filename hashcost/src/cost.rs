// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{HashCostError, HashCostResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The work factor of an adaptive password hash. Each step up doubles the work done by the hash.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CostLevel(u32);

impl CostLevel {
    /// Smallest cost accepted by bcrypt.
    pub const MIN: CostLevel = CostLevel(4);
    /// Largest cost accepted by bcrypt.
    pub const MAX: CostLevel = CostLevel(31);

    /// Create a new cost level, failing if `cost` is outside [Self::MIN]..=[Self::MAX].
    pub fn new(cost: u32) -> HashCostResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&cost) {
            return Err(HashCostError::InvalidCost {
                cost,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(cost))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// All cost levels from `start` to `end`, both inclusive, in ascending order. Empty if
    /// `start > end`.
    pub fn range_inclusive(start: CostLevel, end: CostLevel) -> impl Iterator<Item = CostLevel> {
        (start.0..=end.0).map(CostLevel)
    }
}

impl TryFrom<u32> for CostLevel {
    type Error = HashCostError;

    fn try_from(cost: u32) -> Result<Self, Self::Error> {
        CostLevel::new(cost)
    }
}

impl From<CostLevel> for u32 {
    fn from(cost: CostLevel) -> Self {
        cost.0
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
