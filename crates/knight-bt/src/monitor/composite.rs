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
use knight_search::monitor::search_monitor::SearchCommand;

/// Fans every tree-search hook out to a list of monitors.
pub struct CompositeTreeSearchMonitor<'a> {
    monitors: Vec<Box<dyn TreeSearchMonitor + 'a>>,
}

impl Default for CompositeTreeSearchMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeTreeSearchMonitor<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl std::fmt::Debug for CompositeTreeSearchMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.monitors.iter().map(|m| m.name()).collect();
        f.debug_struct("CompositeTreeSearchMonitor")
            .field("monitors", &names.join(", "))
            .finish()
    }
}

impl TreeSearchMonitor for CompositeTreeSearchMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, board: &Board, start: Position, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(board, start, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline]
    fn search_command(&mut self, depth: usize, statistics: &BacktrackStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            if let SearchCommand::Terminate(reason) = monitor.search_command(depth, statistics) {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }

    #[inline]
    fn on_step(&mut self, depth: usize, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(depth, statistics);
        }
    }

    fn on_moves_enqueued(&mut self, depth: usize, count: usize, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_moves_enqueued(depth, count, statistics);
        }
    }

    fn on_descend(&mut self, to: Position, depth: usize, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_descend(to, depth, statistics);
        }
    }

    fn on_backtrack(&mut self, depth: usize, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_backtrack(depth, statistics);
        }
    }

    fn on_tour_found(&mut self, tour: &Tour, statistics: &BacktrackStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_tour_found(tour, statistics);
        }
    }
}
