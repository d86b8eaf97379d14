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

use crate::{monitor::tree_search_monitor::TreeSearchMonitor, stats::BacktrackStatistics};
use knight_model::{board::Board, position::Position, tour::Tour};
use knight_search::monitor::search_monitor::{SearchCommand, SearchMonitor};

/// Adapts a generic [`SearchMonitor`] to the tree-search hooks.
///
/// Tree-specific events (descend, backtrack, enqueue) are dropped.
pub struct WrapperMonitor<'a> {
    inner: &'a mut dyn SearchMonitor,
    name: String,
}

impl<'a> WrapperMonitor<'a> {
    #[inline(always)]
    pub fn new(inner: &'a mut dyn SearchMonitor) -> Self {
        let name = format!("WrapperMonitor({})", inner.name());
        Self { inner, name }
    }
}

impl std::fmt::Debug for WrapperMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TreeSearchMonitor for WrapperMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    fn on_enter_search(&mut self, board: &Board, start: Position, _statistics: &BacktrackStatistics) {
        self.inner.on_enter_search(board, start);
    }

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &BacktrackStatistics) {
        self.inner.on_exit_search();
    }

    #[inline(always)]
    fn search_command(&mut self, _depth: usize, _statistics: &BacktrackStatistics) -> SearchCommand {
        self.inner.search_command()
    }

    #[inline(always)]
    fn on_step(&mut self, _depth: usize, _statistics: &BacktrackStatistics) {
        self.inner.on_step();
    }

    #[inline(always)]
    fn on_moves_enqueued(&mut self, _depth: usize, _count: usize, _statistics: &BacktrackStatistics) {}

    #[inline(always)]
    fn on_descend(&mut self, _to: Position, _depth: usize, _statistics: &BacktrackStatistics) {}

    #[inline(always)]
    fn on_backtrack(&mut self, _depth: usize, _statistics: &BacktrackStatistics) {}

    #[inline(always)]
    fn on_tour_found(&mut self, tour: &Tour, _statistics: &BacktrackStatistics) {
        self.inner.on_tour_found(tour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_search::monitor::step_limit::StepLimitMonitor;

    #[test]
    fn test_forwards_steps_and_commands() {
        let board = Board::new(5).unwrap();
        let stats = BacktrackStatistics::default();
        let mut inner = StepLimitMonitor::new(2);
        {
            let mut wrapper = WrapperMonitor::new(&mut inner);
            assert_eq!(wrapper.name(), "WrapperMonitor(StepLimitMonitor)");
            wrapper.on_enter_search(&board, Position::new(0, 0), &stats);
            wrapper.on_step(1, &stats);
            assert_eq!(wrapper.search_command(1, &stats), SearchCommand::Continue);
            wrapper.on_step(1, &stats);
            assert!(matches!(
                wrapper.search_command(1, &stats),
                SearchCommand::Terminate(_)
            ));
        }
        assert_eq!(inner.steps(), 2);
    }
}
