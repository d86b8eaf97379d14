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

//! List-based backtracking engine.
//!
//! `BacktrackSolver` runs a depth-first search over knight moves with an
//! explicit `SearchStack` of pending candidates and a single `TourState`
//! holding the path and its visited set. Each level of the stack holds the
//! untried candidates of one cell on the path, in the order chosen by a
//! `MoveOrdering`. Descending pushes the move onto the path and opens a
//! level; an exhausted level is closed and its move undone.
//!
//! With `FixedOrder` this is plain exhaustive backtracking; with
//! `WarnsdorffOrder` it is Warnsdorff DFS. Both are complete: the search ends
//! with `InfeasibilityProven` only after every branch from the start has
//! been tried. The longest path reached is kept and returned when no tour is
//! found.

use crate::{
    monitor::tree_search_monitor::TreeSearchMonitor,
    ordering::move_ordering::MoveOrdering,
    result::BacktrackOutcome,
    stack::SearchStack,
    stats::BacktrackStatistics,
};
use knight_model::{
    board::Board,
    position::Position,
    tour::{Tour, TourState},
};
use knight_search::{monitor::search_monitor::SearchCommand, result::TerminationReason};

/// A reusable backtracking engine. The stack allocation is kept across solves.
#[derive(Clone, Debug, Default)]
pub struct BacktrackSolver {
    stack: SearchStack,
}

impl BacktrackSolver {
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: SearchStack::new(),
        }
    }

    /// Creates a solver with its stack sized for `board`.
    #[inline]
    pub fn preallocated(board: &Board) -> Self {
        let mut stack = SearchStack::new();
        stack.ensure_capacity(board.num_cells());
        Self { stack }
    }

    /// Searches for a tour of `board` from `start`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    pub fn solve<O, S>(
        &mut self,
        board: &Board,
        start: Position,
        ordering: &mut O,
        mut monitor: S,
    ) -> BacktrackOutcome
    where
        O: MoveOrdering + ?Sized,
        S: TreeSearchMonitor,
    {
        debug_assert!(
            board.contains(start),
            "called `BacktrackSolver::solve` with start {} outside {}",
            start,
            board
        );

        self.stack.reset();
        self.stack.ensure_capacity(board.num_cells());

        let session = BacktrackSearchSession::new(self, board, start, ordering, &mut monitor);
        session.run()
    }
}

impl std::fmt::Display for BacktrackSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BacktrackSolver({})", self.stack)
    }
}

/// State and logic of a single search run.
struct BacktrackSearchSession<'a, O, S>
where
    O: ?Sized,
{
    solver: &'a mut BacktrackSolver,
    board: &'a Board,
    start: Position,
    ordering: &'a mut O,
    monitor: &'a mut S,
    state: TourState,
    longest: Tour,
    stats: BacktrackStatistics,
    start_time: std::time::Instant,
}

impl<'a, O, S> BacktrackSearchSession<'a, O, S>
where
    O: MoveOrdering + ?Sized,
    S: TreeSearchMonitor,
{
    #[inline]
    fn new(
        solver: &'a mut BacktrackSolver,
        board: &'a Board,
        start: Position,
        ordering: &'a mut O,
        monitor: &'a mut S,
    ) -> Self {
        let state = TourState::new(board, start);
        let longest = state.tour().clone();
        Self {
            solver,
            board,
            start,
            ordering,
            monitor,
            state,
            longest,
            stats: BacktrackStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> BacktrackOutcome {
        self.monitor
            .on_enter_search(self.board, self.start, &self.stats);

        self.initialize();

        let termination_reason = if self.state.is_complete(self.board) {
            self.handle_complete_tour();
            TerminationReason::TourFound
        } else {
            loop {
                self.monitor.on_step(self.state.len(), &self.stats);
                self.stats.on_step();

                if let SearchCommand::Terminate(msg) =
                    self.monitor.search_command(self.state.len(), &self.stats)
                {
                    break TerminationReason::Aborted(msg);
                }

                if self.solver.stack.is_current_level_empty() {
                    if self.solver.stack.depth() <= 1 {
                        break TerminationReason::InfeasibilityProven;
                    }
                    self.backtrack_step();
                } else if self.descend_next() {
                    self.handle_complete_tour();
                    break TerminationReason::TourFound;
                }
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    /// Opens the root level and pushes the start cell's candidates.
    #[inline]
    fn initialize(&mut self) {
        self.solver.stack.push_frame();
        self.stats.on_node_explored();
        self.stats.on_depth_update(1);
        self.enqueue_moves();
    }

    #[inline]
    fn finalize_result(self, reason: TerminationReason) -> BacktrackOutcome {
        match reason {
            TerminationReason::TourFound => {
                BacktrackOutcome::found(self.state.into_tour(), self.stats)
            }
            TerminationReason::Aborted(msg) => {
                BacktrackOutcome::aborted(self.longest, msg, self.stats)
            }
            _ => BacktrackOutcome::infeasible(self.longest, self.stats),
        }
    }

    #[inline]
    fn enqueue_moves(&mut self) {
        let moves = self.ordering.order_moves(self.board, &self.state);
        let count = moves.len();
        self.solver.stack.extend_ordered(moves);
        self.stats.on_moves_generated(count);
        self.monitor
            .on_moves_enqueued(self.state.len(), count, &self.stats);
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.solver.stack.pop_frame();
        let undone = self.state.retract();
        debug_assert!(
            undone.is_some(),
            "called `BacktrackSearchSession::backtrack_step` with an empty path"
        );
        self.stats.on_backtrack();
        self.monitor.on_backtrack(self.state.len(), &self.stats);
    }

    /// Takes the next candidate of the current level and moves there.
    /// Returns `true` if the path now covers the board.
    #[inline]
    fn descend_next(&mut self) -> bool {
        let Some(next) = self.solver.stack.pop() else {
            return false;
        };

        let extended = self.state.extend(next);
        debug_assert!(
            extended,
            "called `BacktrackSearchSession::descend_next` with visited candidate {}",
            next
        );
        if !extended {
            return false;
        }

        self.solver.stack.push_frame();
        let depth = self.state.len();
        self.stats.on_node_explored();
        self.stats.on_depth_update(depth as u64);
        self.monitor.on_descend(next, depth, &self.stats);

        if depth > self.longest.len() {
            self.longest = self.state.tour().clone();
        }

        if self.state.is_complete(self.board) {
            return true;
        }

        self.enqueue_moves();
        false
    }

    #[inline]
    fn handle_complete_tour(&mut self) {
        self.stats.on_tour_found();
        self.monitor.on_tour_found(self.state.tour(), &self.stats);
    }
}
