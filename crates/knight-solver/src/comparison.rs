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

//! The results of one portfolio run, side by side.

use knight_model::{board::Board, position::Position};
use knight_search::{
    report::{format_execution_time, AlgorithmResult},
    stats::SolverStatistics,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    board: Board,
    start: Position,
    results: Vec<AlgorithmResult>,
    #[serde(skip)]
    statistics: SolverStatistics,
}

impl Comparison {
    #[inline]
    pub fn new(
        board: Board,
        start: Position,
        results: Vec<AlgorithmResult>,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            board,
            start,
            results,
            statistics,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The results in portfolio order.
    #[inline]
    pub fn results(&self) -> &[AlgorithmResult] {
        &self.results
    }

    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Looks a result up by strategy name.
    pub fn result(&self, name: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|result| result.name() == name)
    }

    /// The quickest strategy that produced a valid tour.
    pub fn fastest_complete(&self) -> Option<&AlgorithmResult> {
        self.results
            .iter()
            .filter(|result| result.success())
            .min_by_key(|result| result.execution_time())
    }

    /// Iterates over the successful results.
    pub fn complete(&self) -> impl Iterator<Item = &AlgorithmResult> + '_ {
        self.results.iter().filter(|result| result.success())
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Knight's tour on {} from {}", self.board, self.start)?;
        writeln!(
            f,
            "{:<22} {:>6} {:>9} {:>10}  {}",
            "Algorithm", "Steps", "Complete", "Time", "Reason"
        )?;
        for result in &self.results {
            writeln!(
                f,
                "{:<22} {:>6} {:>9} {:>10}  {}",
                result.name(),
                result.path().len(),
                if result.success() { "yes" } else { "no" },
                format_execution_time(result.execution_time()),
                result.reason()
            )?;
        }
        match self.fastest_complete() {
            Some(fastest) => writeln!(f, "Fastest complete tour: {}", fastest.name()),
            None => writeln!(f, "No strategy found a complete tour"),
        }
    }
}
