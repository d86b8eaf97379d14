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
use knight_model::{board::Board, position::Position, tour::Tour};
use knight_search::monitor::search_monitor::SearchCommand;

/// Observation and control hooks of the backtracking engines.
///
/// `depth` is always the length of the current path in cells.
pub trait TreeSearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, board: &Board, start: Position, statistics: &BacktrackStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BacktrackStatistics);
    /// Called to determine the next action of the search.
    fn search_command(&mut self, _depth: usize, _statistics: &BacktrackStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called at each iteration of the main loop.
    fn on_step(&mut self, depth: usize, statistics: &BacktrackStatistics);
    /// Called when candidate moves are pushed for the current cell.
    fn on_moves_enqueued(&mut self, depth: usize, count: usize, statistics: &BacktrackStatistics);
    /// Called after moving to `to`.
    fn on_descend(&mut self, to: Position, depth: usize, statistics: &BacktrackStatistics);
    /// Called after undoing the last move.
    fn on_backtrack(&mut self, depth: usize, statistics: &BacktrackStatistics);
    /// Called when a complete tour is reached.
    fn on_tour_found(&mut self, tour: &Tour, statistics: &BacktrackStatistics);
}

impl std::fmt::Debug for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<M> TreeSearchMonitor for &mut M
where
    M: TreeSearchMonitor + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_enter_search(&mut self, board: &Board, start: Position, statistics: &BacktrackStatistics) {
        (**self).on_enter_search(board, start, statistics)
    }

    #[inline]
    fn on_exit_search(&mut self, statistics: &BacktrackStatistics) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn search_command(&mut self, depth: usize, statistics: &BacktrackStatistics) -> SearchCommand {
        (**self).search_command(depth, statistics)
    }

    #[inline(always)]
    fn on_step(&mut self, depth: usize, statistics: &BacktrackStatistics) {
        (**self).on_step(depth, statistics)
    }

    #[inline(always)]
    fn on_moves_enqueued(&mut self, depth: usize, count: usize, statistics: &BacktrackStatistics) {
        (**self).on_moves_enqueued(depth, count, statistics)
    }

    #[inline(always)]
    fn on_descend(&mut self, to: Position, depth: usize, statistics: &BacktrackStatistics) {
        (**self).on_descend(to, depth, statistics)
    }

    #[inline(always)]
    fn on_backtrack(&mut self, depth: usize, statistics: &BacktrackStatistics) {
        (**self).on_backtrack(depth, statistics)
    }

    #[inline]
    fn on_tour_found(&mut self, tour: &Tour, statistics: &BacktrackStatistics) {
        (**self).on_tour_found(tour, statistics)
    }
}
