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
use std::time::{Duration, Instant};

/// Periodically logs a progress table line through the `log` facade.
///
/// The clock is only read when `nodes_explored & clock_check_mask == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    num_cells: usize,
    lines_logged: u64,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            num_cells: 0,
            lines_logged: 0,
        }
    }

    /// Returns the number of progress lines written so far.
    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    #[inline(always)]
    fn log_header(&self) {
        ::log::info!(
            "{:<9} | {:<14} | {:<11} | {:<11} | {:<12}",
            "Elapsed",
            "Nodes",
            "Depth",
            "Max Depth",
            "Backtracks"
        );
        ::log::info!("{}", "-".repeat(67));
    }

    #[inline(always)]
    fn log_line(&mut self, depth: usize, stats: &BacktrackStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        ::log::info!(
            "{:<9} | {:<14} | {:<11} | {:<11} | {:<12}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            format!("{}/{}", depth, self.num_cells),
            stats.max_depth,
            stats.backtracks
        );
        self.last_log_time = now;
        self.lines_logged += 1;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl TreeSearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, board: &Board, start: Position, _stats: &BacktrackStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.num_cells = board.num_cells();
        self.lines_logged = 0;
        ::log::info!("Searching {} from {}", board, start);
        self.log_header();
    }

    fn on_exit_search(&mut self, stats: &BacktrackStatistics) {
        ::log::info!("{}", "-".repeat(67));
        ::log::info!(
            "Search finished: {} nodes, {} backtracks, max depth {}/{}.",
            stats.nodes_explored,
            stats.backtracks,
            stats.max_depth,
            self.num_cells
        );
    }

    fn on_step(&mut self, _depth: usize, _stats: &BacktrackStatistics) {}

    fn on_moves_enqueued(&mut self, _depth: usize, _count: usize, _stats: &BacktrackStatistics) {}

    fn on_descend(&mut self, _to: Position, depth: usize, stats: &BacktrackStatistics) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(depth, stats);
        }
    }

    fn on_backtrack(&mut self, _depth: usize, _stats: &BacktrackStatistics) {}

    fn on_tour_found(&mut self, tour: &Tour, stats: &BacktrackStatistics) {
        ::log::info!(
            "Tour of {} steps found after {} nodes.",
            tour.len(),
            stats.nodes_explored
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_only_when_interval_elapsed_and_mask_hits() {
        let board = Board::new(5).unwrap();
        let mut stats = BacktrackStatistics::default();
        let mut monitor = LogMonitor::new(Duration::ZERO, 0x3);
        monitor.on_enter_search(&board, Position::new(0, 0), &stats);

        stats.nodes_explored = 1;
        monitor.on_descend(Position::new(1, 2), 2, &stats);
        assert_eq!(monitor.lines_logged(), 0);

        stats.nodes_explored = 4;
        monitor.on_descend(Position::new(2, 4), 3, &stats);
        assert_eq!(monitor.lines_logged(), 1);
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::default();
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
    }
}
