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

use knight_model::tour::Tour;
use serde::Serialize;

/// Why a strategy stopped.
///
/// Only `TourFound` is a claim of success, and even that claim is checked
/// by the validator before a result is reported as successful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// The strategy reached a path covering every cell.
    TourFound,
    /// An exhaustive search explored every branch without finding a tour.
    InfeasibilityProven,
    /// A strategy without backtracking ran out of unvisited moves.
    DeadEnd,
    /// The frontier search emptied its queue without a complete path.
    FrontierExhausted,
    /// Annealing reached its minimum temperature.
    CoolingFinished,
    /// The input does not meet the strategy's requirements; no search ran.
    PreconditionViolated(String),
    /// A monitor or limit stopped the search early.
    Aborted(String),
}

impl TerminationReason {
    /// Returns `true` for [`TerminationReason::Aborted`].
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, TerminationReason::Aborted(_))
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::TourFound => write!(f, "Tour Found"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::DeadEnd => write!(f, "Dead End"),
            TerminationReason::FrontierExhausted => write!(f, "Frontier Exhausted"),
            TerminationReason::CoolingFinished => write!(f, "Cooling Finished"),
            TerminationReason::PreconditionViolated(msg) => {
                write!(f, "Precondition Violated: {}", msg)
            }
            TerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
        }
    }
}

/// The raw answer of a strategy: the path it ended with and why it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub tour: Tour,
    pub reason: TerminationReason,
}

impl StrategyOutcome {
    #[inline]
    pub fn new(tour: Tour, reason: TerminationReason) -> Self {
        Self { tour, reason }
    }

    /// A complete tour.
    #[inline]
    pub fn found(tour: Tour) -> Self {
        Self::new(tour, TerminationReason::TourFound)
    }

    /// A run stopped by a monitor, carrying the best partial path.
    #[inline]
    pub fn aborted<S>(tour: Tour, message: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(tour, TerminationReason::Aborted(message.into()))
    }

    /// A run rejected before searching.
    #[inline]
    pub fn precondition_violated<S>(tour: Tour, message: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(tour, TerminationReason::PreconditionViolated(message.into()))
    }

    /// Returns `true` if the strategy claims to have found a tour.
    #[inline]
    pub fn claims_tour(&self) -> bool {
        self.reason == TerminationReason::TourFound
    }
}

impl std::fmt::Display for StrategyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StrategyOutcome(steps: {}, reason: {})",
            self.tour.len(),
            self.reason
        )
    }
}
