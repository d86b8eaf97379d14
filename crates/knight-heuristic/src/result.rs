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

use crate::stats::{FrontierStatistics, GreedyStatistics};
use knight_model::tour::Tour;
use knight_search::result::{StrategyOutcome, TerminationReason};

/// The outcome of a greedy traversal: the walk as far as it got.
#[derive(Debug, Clone)]
pub struct GreedyOutcome {
    tour: Tour,
    termination_reason: TerminationReason,
    statistics: GreedyStatistics,
}

impl GreedyOutcome {
    #[inline]
    pub fn new(tour: Tour, termination_reason: TerminationReason, statistics: GreedyStatistics) -> Self {
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
    pub fn statistics(&self) -> &GreedyStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for GreedyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GreedyOutcome(steps: {}, reason: {})",
            self.tour.len(),
            self.termination_reason
        )
    }
}

impl From<GreedyOutcome> for StrategyOutcome {
    fn from(val: GreedyOutcome) -> Self {
        StrategyOutcome::new(val.tour, val.termination_reason)
    }
}

/// The outcome of a frontier search.
///
/// Unless a tour was found, the tour is the longest path popped from the
/// frontier.
#[derive(Debug, Clone)]
pub struct FrontierOutcome {
    tour: Tour,
    termination_reason: TerminationReason,
    statistics: FrontierStatistics,
}

impl FrontierOutcome {
    #[inline]
    pub fn new(
        tour: Tour,
        termination_reason: TerminationReason,
        statistics: FrontierStatistics,
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
    pub fn statistics(&self) -> &FrontierStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for FrontierOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FrontierOutcome(steps: {}, reason: {}, expansions: {})",
            self.tour.len(),
            self.termination_reason,
            self.statistics.expansions
        )
    }
}

impl From<FrontierOutcome> for StrategyOutcome {
    fn from(val: FrontierOutcome) -> Self {
        StrategyOutcome::new(val.tour, val.termination_reason)
    }
}
