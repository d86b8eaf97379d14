// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use knight_model::{board::Board, position::Position, tour::Tour};

/// Terminates the search after a fixed number of steps.
///
/// Deterministic, unlike [`TimeLimitMonitor`](crate::monitor::time_limit::TimeLimitMonitor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLimitMonitor {
    max_steps: u64,
    steps: u64,
}

impl StepLimitMonitor {
    #[inline]
    pub fn new(max_steps: u64) -> Self {
        Self {
            max_steps,
            steps: 0,
        }
    }

    /// Returns the number of steps observed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the configured maximum.
    #[inline]
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }
}

impl SearchMonitor for StepLimitMonitor {
    fn name(&self) -> &str {
        "StepLimitMonitor"
    }

    fn on_enter_search(&mut self, _board: &Board, _start: Position) {
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_tour_found(&mut self, _tour: &Tour) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.steps >= self.max_steps {
            SearchCommand::Terminate(format!("step limit of {} reached", self.max_steps))
        } else {
            SearchCommand::Continue
        }
    }
}

impl std::fmt::Display for StepLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StepLimitMonitor(steps: {}, max_steps: {})",
            self.steps, self.max_steps
        )
    }
}
