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

//! The interface every knight's tour strategy implements.

use crate::{monitor::search_monitor::SearchMonitor, result::StrategyOutcome};
use knight_model::{board::Board, position::Position};

/// Everything a strategy needs for one run.
///
/// The start position has already been checked against the board by the
/// caller (see [`crate::report::run_strategy`]).
pub struct StrategyContext<'a> {
    pub board: Board,
    pub start: Position,
    pub monitor: &'a mut dyn SearchMonitor,
}

impl<'a> StrategyContext<'a> {
    #[inline]
    pub fn new(board: Board, start: Position, monitor: &'a mut dyn SearchMonitor) -> Self {
        Self {
            board,
            start,
            monitor,
        }
    }
}

impl std::fmt::Debug for StrategyContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyContext")
            .field("board", &self.board)
            .field("start", &self.start)
            .field("monitor", &self.monitor.name())
            .finish()
    }
}

/// A knight's tour search procedure.
///
/// `solve` never fails: a strategy that cannot find a tour returns its best
/// path with a non-`TourFound` reason. Implementations own any mutable state
/// they carry across runs, such as random sources or preallocated buffers.
pub trait TourStrategy: Send {
    /// The display name, e.g. `"Warnsdorff DFS"`.
    fn name(&self) -> &str;
    /// A presentation hint (CSS hex color). Opaque to the engine.
    fn color(&self) -> &str;
    /// Runs the search.
    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome;
}

impl std::fmt::Debug for dyn TourStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TourStrategy({})", self.name())
    }
}

impl std::fmt::Display for dyn TourStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
