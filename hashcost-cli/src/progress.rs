// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use hashcost::sweep::TrialProgress;
use hashcost::traits::SweepObserver;
use std::io::Write;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draws a one line spinner with the current cost and iteration, rewriting the line in place.
///
/// Progress is cosmetic, so write errors are ignored.
pub struct Spinner<W: Write> {
    out: W,
}

impl<W: Write> Spinner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SweepObserver for Spinner<W> {
    fn on_trial(&mut self, progress: &TrialProgress) {
        let frame = SPINNER_FRAMES[progress.tick % SPINNER_FRAMES.len()];
        let _ = write!(
            self.out,
            "\r{} Running: cost={}, iteration={}/{}    ",
            frame, progress.cost, progress.iteration, progress.iterations
        );
        let _ = self.out.flush();
    }

    fn on_finish(&mut self) {
        // Return to the start of the line and clear it.
        let _ = write!(self.out, "\r\x1b[K");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashcost::cost::CostLevel;

    #[test]
    fn test_spinner() {
        let mut spinner = Spinner::new(Vec::new());
        let cost = CostLevel::new(10).unwrap();
        for (iteration, tick) in [(1, 1), (2, 2), (3, 13)] {
            spinner.on_trial(&TrialProgress {
                cost,
                iteration,
                iterations: 3,
                tick,
            });
        }
        spinner.on_finish();

        let output = String::from_utf8(spinner.into_inner()).unwrap();
        assert_eq!(
            output,
            "\r⠙ Running: cost=10, iteration=1/3    \
             \r⠹ Running: cost=10, iteration=2/3    \
             \r⠸ Running: cost=10, iteration=3/3    \
             \r\x1b[K"
        );
    }
}
