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

use crate::stats::AnnealingStatistics;
use knight_model::tour::Tour;
use knight_search::result::{StrategyOutcome, TerminationReason};

/// The best walk of an annealing run, renumbered from 1.
#[derive(Debug, Clone)]
pub struct AnnealingOutcome {
    tour: Tour,
    termination_reason: TerminationReason,
    statistics: AnnealingStatistics,
}

impl AnnealingOutcome {
    #[inline]
    pub fn new(
        tour: Tour,
        termination_reason: TerminationReason,
        statistics: AnnealingStatistics,
    ) -> Self {
        Self {
            tour,
            termination_reason,
            statistics,
        }
    }

    #[inline]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &AnnealingStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for AnnealingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AnnealingOutcome(steps: {}, reason: {}, best score: {})",
            self.tour.len(),
            self.termination_reason,
            self.statistics.best_score
        )
    }
}

impl From<AnnealingOutcome> for StrategyOutcome {
    fn from(val: AnnealingOutcome) -> Self {
        StrategyOutcome::new(val.tour, val.termination_reason)
    }
}
