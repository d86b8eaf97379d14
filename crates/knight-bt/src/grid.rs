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

//! Grid-based backtracking engine for power-of-two boards.
//!
//! The board is a flat `N * N` grid of `i32`, each cell holding the 0-based
//! move index at which it was visited, or `UNVISITED`. Moves are tried in the
//! order of `GRID_OFFSETS`, which differs from the generation order of
//! `Board::knight_moves`. Each frame of the explicit stack is a cell on the
//! path and the index of the next offset to try from it.
//!
//! The engine only accepts boards with `N >= 4` and `N` a power of two.
//! Other sizes are rejected before any search with
//! `TerminationReason::PreconditionViolated` and a one-step path.

use crate::{
    monitor::tree_search_monitor::TreeSearchMonitor, result::BacktrackOutcome,
    stats::BacktrackStatistics,
};
use knight_model::{board::Board, position::Position, tour::Tour};
use knight_search::{monitor::search_monitor::SearchCommand, result::TerminationReason};

/// Knight offsets `(delta_row, delta_col)` in the order this engine tries them.
pub const GRID_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const UNVISITED: i32 = -1;

/// The smallest board side the engine accepts.
pub const MIN_GRID_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frame {
    position: Position,
    next_offset: u8,
}

/// A reusable grid backtracking engine.
#[derive(Clone, Debug, Default)]
pub struct GridBacktrackSolver {
    grid: Vec<i32>,
    frames: Vec<Frame>,
}

impl GridBacktrackSolver {
    #[inline]
    pub fn new() -> Self {
        Self {
            grid: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Returns `Ok(())` if `board` meets the size requirement, or a
    /// human-readable reason otherwise.
    pub fn check_board(board: &Board) -> Result<(), String> {
        if board.size() < MIN_GRID_SIZE {
            return Err(format!(
                "board size {} is smaller than {}",
                board.size(),
                MIN_GRID_SIZE
            ));
        }
        if !board.is_power_of_two() {
            return Err(format!("board size {} is not a power of two", board.size()));
        }
        Ok(())
    }

    /// Searches for a tour of `board` from `start`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    pub fn solve<S>(&mut self, board: &Board, start: Position, mut monitor: S) -> BacktrackOutcome
    where
        S: TreeSearchMonitor,
    {
        debug_assert!(
            board.contains(start),
            "called `GridBacktrackSolver::solve` with start {} outside {}",
            start,
            board
        );

        let mut stats = BacktrackStatistics::default();
        monitor.on_enter_search(board, start, &stats);

        if let Err(reason) = Self::check_board(board) {
            monitor.on_exit_search(&stats);
            return BacktrackOutcome::precondition_violated(
                Tour::starting_at(start),
                reason,
                stats,
            );
        }

        let session = GridSearchSession::new(self, board, start, &mut monitor, &mut stats);
        let (tour, reason) = session.run();

        monitor.on_exit_search(&stats);
        match reason {
            TerminationReason::TourFound => BacktrackOutcome::found(tour, stats),
            TerminationReason::Aborted(msg) => BacktrackOutcome::aborted(tour, msg, stats),
            _ => BacktrackOutcome::infeasible(tour, stats),
        }
    }
}

struct GridSearchSession<'a, S> {
    solver: &'a mut GridBacktrackSolver,
    board: &'a Board,
    monitor: &'a mut S,
    stats: &'a mut BacktrackStatistics,
    longest: Vec<Position>,
    start_time: std::time::Instant,
}

impl<'a, S> GridSearchSession<'a, S>
where
    S: TreeSearchMonitor,
{
    fn new(
        solver: &'a mut GridBacktrackSolver,
        board: &'a Board,
        start: Position,
        monitor: &'a mut S,
        stats: &'a mut BacktrackStatistics,
    ) -> Self {
        let num_cells = board.num_cells();
        solver.grid.clear();
        solver.grid.resize(num_cells, UNVISITED);
        solver.frames.clear();
        solver.frames.reserve(num_cells);

        solver.grid[board.cell_index(start)] = 0;
        solver.frames.push(Frame {
            position: start,
            next_offset: 0,
        });

        Self {
            solver,
            board,
            monitor,
            stats,
            longest: vec![start],
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> (Tour, TerminationReason) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(1);

        let reason = loop {
            if self.solver.frames.len() == self.board.num_cells() {
                break TerminationReason::TourFound;
            }

            let depth = self.solver.frames.len();
            self.monitor.on_step(depth, self.stats);
            self.stats.on_step();

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(depth, self.stats) {
                break TerminationReason::Aborted(msg);
            }

            self.step();

            if self.solver.frames.is_empty() {
                break TerminationReason::InfeasibilityProven;
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());

        if reason == TerminationReason::TourFound {
            let tour = self.rebuild_from_grid();
            self.stats.on_tour_found();
            self.monitor.on_tour_found(&tour, self.stats);
            (tour, reason)
        } else {
            (Tour::from_positions(self.longest), reason)
        }
    }

    /// Tries the next offset of the top frame, or pops the frame once all
    /// eight offsets are spent.
    #[inline]
    fn step(&mut self) {
        let size = self.board.size();
        let Some(top) = self.solver.frames.last_mut() else {
            return;
        };

        if usize::from(top.next_offset) >= GRID_OFFSETS.len() {
            let position = top.position;
            self.solver.frames.pop();
            self.solver.grid[position.row() * size + position.col()] = UNVISITED;
            if !self.solver.frames.is_empty() {
                self.stats.on_backtrack();
                self.monitor.on_backtrack(self.solver.frames.len(), self.stats);
            }
            return;
        }

        let (dr, dc) = GRID_OFFSETS[usize::from(top.next_offset)];
        top.next_offset += 1;
        let from = top.position;
        self.stats.on_moves_generated(1);

        let Some(to) = from.offset(dr, dc) else {
            return;
        };
        if !self.board.contains(to) {
            return;
        }
        let index = self.board.cell_index(to);
        if self.solver.grid[index] != UNVISITED {
            return;
        }

        let depth = self.solver.frames.len();
        self.solver.grid[index] = depth as i32;
        self.solver.frames.push(Frame {
            position: to,
            next_offset: 0,
        });

        self.stats.on_node_explored();
        self.stats.on_depth_update((depth + 1) as u64);
        self.monitor.on_descend(to, depth + 1, self.stats);

        if depth + 1 > self.longest.len() {
            self.longest.clear();
            self.longest
                .extend(self.solver.frames.iter().map(|frame| frame.position));
        }
    }

    /// Reads the path back from the grid by increasing move index.
    fn rebuild_from_grid(&self) -> Tour {
        let mut ordered: Vec<Option<Position>> = vec![None; self.board.num_cells()];
        for (index, &mark) in self.solver.grid.iter().enumerate() {
            if let Ok(step) = usize::try_from(mark) {
                if let (Some(slot), Some(position)) =
                    (ordered.get_mut(step), self.board.position_of(index))
                {
                    *slot = Some(position);
                }
            }
        }
        Tour::from_positions(ordered.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, wrapper::WrapperMonitor};
    use knight_model::validation::validate_tour;
    use knight_search::monitor::step_limit::StepLimitMonitor;

    #[test]
    fn test_offsets_are_all_knight_moves() {
        let origin = Position::new(4, 4);
        for (dr, dc) in GRID_OFFSETS {
            let to = origin.offset(dr, dc).unwrap();
            assert!(origin.is_knight_move_to(&to));
        }
    }

    #[test]
    fn test_rejects_small_and_non_power_of_two_sizes() {
        for n in [1usize, 2, 3, 5, 6, 7, 12] {
            let board = Board::new(n).unwrap();
            let outcome =
                GridBacktrackSolver::new().solve(&board, Position::new(0, 0), NoOperationMonitor::new());
            assert!(
                matches!(
                    outcome.termination_reason(),
                    TerminationReason::PreconditionViolated(_)
                ),
                "n = {n}"
            );
            assert_eq!(outcome.tour().len(), 1);
            assert_eq!(outcome.statistics().nodes_explored, 0);
        }
    }

    #[test]
    fn test_precondition_messages() {
        assert_eq!(
            GridBacktrackSolver::check_board(&Board::new(3).unwrap()),
            Err("board size 3 is smaller than 4".to_string())
        );
        assert_eq!(
            GridBacktrackSolver::check_board(&Board::new(6).unwrap()),
            Err("board size 6 is not a power of two".to_string())
        );
        assert!(GridBacktrackSolver::check_board(&Board::new(16).unwrap()).is_ok());
    }

    #[test]
    fn test_four_by_four_searches_and_fails() {
        let board = Board::new(4).unwrap();
        let outcome =
            GridBacktrackSolver::new().solve(&board, Position::new(0, 0), NoOperationMonitor::new());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
        assert!(outcome.tour().len() > 1);
        assert!(outcome.tour().len() < 16);
        assert!(outcome.statistics().nodes_explored > 1);

        // The longest partial path is still a legal path.
        let report = validate_tour(&board, outcome.tour().steps());
        assert_eq!(report.issues().len(), 1);
    }

    #[test]
    fn test_eight_by_eight_under_step_limit() {
        let board = Board::new(8).unwrap();
        let mut limit = StepLimitMonitor::new(20_000);
        let outcome = GridBacktrackSolver::new().solve(
            &board,
            Position::new(0, 0),
            WrapperMonitor::new(&mut limit),
        );
        match outcome.termination_reason() {
            TerminationReason::TourFound => {
                assert!(validate_tour(&board, outcome.tour().steps()).is_valid())
            }
            TerminationReason::Aborted(_) => assert!(outcome.tour().len() >= 1),
            other => panic!("unexpected reason {other}"),
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let board = Board::new(4).unwrap();
        let mut solver = GridBacktrackSolver::new();
        let a = solver.solve(&board, Position::new(1, 2), NoOperationMonitor::new());
        let b = solver.solve(&board, Position::new(1, 2), NoOperationMonitor::new());
        assert_eq!(a.tour(), b.tour());
        assert_eq!(a.statistics().nodes_explored, b.statistics().nodes_explored);
    }
}
