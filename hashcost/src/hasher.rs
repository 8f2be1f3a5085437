// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Implementations of [CostHasher] for the supported password hashes.

use crate::cost::CostLevel;
use crate::error::HashCostResult;
use crate::traits::CostHasher;

/// bcrypt as implemented by the `bcrypt` crate. Every call draws a fresh random salt, so repeated
/// calls never hit a cache.
#[derive(Clone, Copy, Debug, Default)]
pub struct BcryptHasher;

impl CostHasher for BcryptHasher {
    type Output = String;

    fn name(&self) -> &'static str {
        "bcrypt"
    }

    fn hash(&mut self, payload: &[u8], cost: CostLevel) -> HashCostResult<String> {
        Ok(bcrypt::hash(payload, cost.value())?)
    }
}
