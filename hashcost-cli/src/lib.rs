// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Building blocks of the bcrypt-bench tool: password generation, progress display and report
//! rendering around a [hashcost::sweep::Sweep].

pub mod error;
pub mod password;
pub mod progress;
pub mod report;
