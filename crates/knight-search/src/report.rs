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

//! Running a strategy and reporting its result.
//!
//! `run_strategy` is the one-call entry point for callers. It rejects
//! malformed input, times the strategy, and decides `success` with the tour
//! validator rather than trusting the strategy's own claim.

use crate::{
    monitor::search_monitor::SearchMonitor,
    result::{StrategyOutcome, TerminationReason},
    strategy::{StrategyContext, TourStrategy},
};
use knight_model::{
    board::Board,
    error::BoardError,
    position::Position,
    tour::Tour,
    validation::{validate_tour, TourIssue},
};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Errors for inputs a strategy cannot even be started on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// The caller-facing record of one strategy run.
///
/// Immutable once built; `success` is true iff the path passed the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    name: String,
    color: String,
    path: Tour,
    #[serde(rename = "execution_time_ms", serialize_with = "serialize_millis")]
    execution_time: Duration,
    success: bool,
    reason: TerminationReason,
    #[serde(skip)]
    issues: Vec<TourIssue>,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

impl AlgorithmResult {
    /// Builds a result from a strategy outcome, validating the path on `board`.
    pub fn from_outcome(
        name: impl Into<String>,
        color: impl Into<String>,
        board: &Board,
        outcome: StrategyOutcome,
        execution_time: Duration,
    ) -> Self {
        let validation = validate_tour(board, outcome.tour.steps());
        Self {
            name: name.into(),
            color: color.into(),
            success: validation.is_valid(),
            issues: validation.issues().to_vec(),
            path: outcome.tour,
            execution_time,
            reason: outcome.reason,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn path(&self) -> &Tour {
        &self.path
    }

    #[inline]
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Wall-clock time in fractional milliseconds.
    #[inline]
    pub fn execution_time_millis(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// `true` iff the path is a complete, legal knight's tour.
    #[inline]
    pub fn success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// The validator's findings for the path. Empty iff `success`.
    #[inline]
    pub fn issues(&self) -> &[TourIssue] {
        &self.issues
    }
}

impl std::fmt::Display for AlgorithmResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({} steps, {}, {})",
            self.name,
            if self.success { "complete" } else { "incomplete" },
            self.path.len(),
            format_execution_time(self.execution_time),
            self.reason
        )
    }
}

/// Runs `strategy` once from `start` on `board`.
///
/// # Errors
///
/// Returns `InputError::Board` if `start` is off the board. A strategy that
/// finds no tour is not an error.
pub fn run_strategy(
    strategy: &mut dyn TourStrategy,
    board: &Board,
    start: Position,
    monitor: &mut dyn SearchMonitor,
) -> Result<AlgorithmResult, InputError> {
    board.check_start(start)?;

    let started = Instant::now();
    let outcome = strategy.solve(StrategyContext::new(*board, start, monitor));
    let elapsed = started.elapsed();

    let result = AlgorithmResult::from_outcome(
        strategy.name(),
        strategy.color(),
        board,
        outcome,
        elapsed,
    );

    log::debug!("{}", result);
    if !result.success && result.reason == TerminationReason::TourFound {
        log::warn!(
            "{} claimed a tour that failed validation: {:?}",
            result.name,
            result.issues
        );
    }

    Ok(result)
}

/// Like [`run_strategy`], but builds the board from its side length first.
///
/// # Errors
///
/// Returns `InputError::Board` for a zero or overflowing size, or an
/// out-of-bounds start.
pub fn run_strategy_on_size(
    strategy: &mut dyn TourStrategy,
    size: usize,
    start: Position,
    monitor: &mut dyn SearchMonitor,
) -> Result<AlgorithmResult, InputError> {
    let board = Board::new(size)?;
    run_strategy(strategy, &board, start, monitor)
}

/// Renders a duration as `< 1 ms`, `N ms` or `N.NN s`.
pub fn format_execution_time(duration: Duration) -> String {
    let millis = duration.as_secs_f64() * 1000.0;
    if millis < 1.0 {
        "< 1 ms".to_string()
    } else if millis < 1000.0 {
        format!("{} ms", millis.round() as u64)
    } else {
        format!("{:.2} s", millis / 1000.0)
    }
}
