// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use hashcost::error::{HashCostError, SweepAborted};
use thiserror::Error;

/// Errors reported by the command line tools.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments describe an invalid sweep.
    #[error(transparent)]
    InvalidArguments(#[from] HashCostError),

    /// The hashing primitive failed during the sweep.
    #[error(transparent)]
    Aborted(#[from] SweepAborted),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            CliError::InvalidArguments(_) => exitcode::USAGE,
            CliError::Aborted(_) => exitcode::SOFTWARE,
            CliError::Io(_) => exitcode::IOERR,
            CliError::Json(_) => exitcode::SOFTWARE,
        }
    }
}
