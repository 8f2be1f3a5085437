// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in hashcost.
//!
//! Configuration errors are meant to be raised by the calling layer before a sweep starts; the
//! sweep itself trusts its configuration. Once a sweep is running, the only error it can hit is a
//! failure of the hashing primitive, which aborts the whole sweep and is reported as
//! [SweepAborted].

use crate::cost::CostLevel;
use crate::stats::CostSummary;
use thiserror::Error;

pub type HashCostResult<T> = Result<T, HashCostError>;

/// Collection of errors to be used in hashcost.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum HashCostError {
    /// The cost is outside the range accepted by the hashing primitive.
    #[error("Cost {cost} is outside the accepted range {min}..={max}")]
    InvalidCost { cost: u32, min: u32, max: u32 },

    /// The start of a cost range is above its end.
    #[error("Start cost {start} must be less than or equal to end cost {end}")]
    InvertedCostRange { start: u32, end: u32 },

    /// A sweep needs at least one iteration per cost level.
    #[error("Iterations must be at least 1")]
    InvalidIterations,

    /// Error reported by the hashing primitive.
    #[error("General hashing error: {0}")]
    GeneralError(String),
}

impl From<bcrypt::BcryptError> for HashCostError {
    fn from(e: bcrypt::BcryptError) -> Self {
        HashCostError::GeneralError(e.to_string())
    }
}

/// A sweep was aborted because the hashing primitive failed.
///
/// Holds the summaries of every cost level that completed before the failure. Samples already
/// collected for the failing cost level are dropped.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("Hashing failed at cost {cost}, iteration {iteration}: {source}")]
pub struct SweepAborted {
    pub cost: CostLevel,
    /// 1-based index of the failing invocation within its cost level.
    pub iteration: usize,
    #[source]
    pub source: HashCostError,
    pub completed: Vec<CostSummary>,
}
