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

use crate::stats::BacktrackStatistics;
use knight_model::tour::Tour;
use knight_search::result::{StrategyOutcome, TerminationReason};

/// The outcome of a backtracking run.
///
/// On any reason other than `TourFound` the tour is the longest partial path
/// reached during the search.
#[derive(Debug, Clone)]
pub struct BacktrackOutcome {
    tour: Tour,
    termination_reason: TerminationReason,
    statistics: BacktrackStatistics,
}

impl BacktrackOutcome {
    #[inline]
    pub fn found(tour: Tour, statistics: BacktrackStatistics) -> Self {
        Self {
            tour,
            termination_reason: TerminationReason::TourFound,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(longest: Tour, statistics: BacktrackStatistics) -> Self {
        Self {
            tour: longest,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(longest: Tour, reason: R, statistics: BacktrackStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            tour: longest,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn precondition_violated<R>(tour: Tour, reason: R, statistics: BacktrackStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            tour,
            termination_reason: TerminationReason::PreconditionViolated(reason.into()),
            statistics,
        }
    }

    /// Returns the tour (complete or the longest partial one).
    #[inline]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BacktrackStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_tour_found(&self) -> bool {
        self.termination_reason == TerminationReason::TourFound
    }
}

impl std::fmt::Display for BacktrackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BacktrackOutcome(steps: {}, reason: {}, nodes: {})",
            self.tour.len(),
            self.termination_reason,
            self.statistics.nodes_explored
        )
    }
}

impl From<BacktrackOutcome> for StrategyOutcome {
    fn from(val: BacktrackOutcome) -> Self {
        StrategyOutcome::new(val.tour, val.termination_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_model::position::Position;

    fn stats() -> BacktrackStatistics {
        BacktrackStatistics::default()
    }

    #[test]
    fn test_constructors_and_conversion() {
        let tour = Tour::starting_at(Position::new(0, 0));

        let found = BacktrackOutcome::found(tour.clone(), stats());
        assert!(found.is_tour_found());
        let outcome: StrategyOutcome = found.into();
        assert_eq!(outcome.reason, TerminationReason::TourFound);

        let infeasible = BacktrackOutcome::infeasible(tour.clone(), stats());
        assert_eq!(
            infeasible.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );

        let aborted = BacktrackOutcome::aborted(tour.clone(), "stop", stats());
        assert_eq!(
            StrategyOutcome::from(aborted).reason,
            TerminationReason::Aborted("stop".to_string())
        );

        let rejected = BacktrackOutcome::precondition_violated(tour, "size", stats());
        assert_eq!(rejected.tour().len(), 1);
        assert!(rejected.to_string().contains("Precondition Violated: size"));
    }
}
