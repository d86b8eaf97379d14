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

//! Greedy Warnsdorff traversal.
//!
//! From the current cell, move to the unvisited neighbour with the fewest
//! unvisited onward moves, and never undo a move. The walk stops when the
//! board is covered or no unvisited neighbour remains.
//!
//! Ties between candidates of equal degree are broken by move generation
//! order, unless the traversal owns a random source, in which case one of
//! the tied candidates is drawn uniformly.

use crate::{result::GreedyOutcome, stats::GreedyStatistics};
use knight_model::{
    board::{Board, KnightMoves},
    position::Position,
    tour::TourState,
};
use knight_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::TerminationReason,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Default)]
pub struct GreedyTraversal {
    rng: Option<ChaCha8Rng>,
}

impl GreedyTraversal {
    /// Creates a deterministic traversal.
    #[inline]
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Creates a traversal that breaks ties with `rng`.
    #[inline]
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self { rng: Some(rng) }
    }

    /// Creates a traversal that breaks ties with a generator seeded by `seed`.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[inline]
    pub fn is_randomized(&self) -> bool {
        self.rng.is_some()
    }

    /// Walks from `start` until the board is covered or the walk is stuck.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    pub fn traverse<S>(&mut self, board: &Board, start: Position, monitor: &mut S) -> GreedyOutcome
    where
        S: SearchMonitor + ?Sized,
    {
        debug_assert!(
            board.contains(start),
            "called `GreedyTraversal::traverse` with start {} outside {}",
            start,
            board
        );

        let started = std::time::Instant::now();
        let mut stats = GreedyStatistics::default();
        let mut state = TourState::new(board, start);
        monitor.on_enter_search(board, start);

        let reason = loop {
            if state.is_complete(board) {
                break TerminationReason::TourFound;
            }

            monitor.on_step();
            if let SearchCommand::Terminate(msg) = monitor.search_command() {
                break TerminationReason::Aborted(msg);
            }

            let Some(next) = self.select(board, &state, &mut stats) else {
                break TerminationReason::DeadEnd;
            };
            let extended = state.extend(next);
            debug_assert!(extended, "greedy step selected visited cell {}", next);
            stats.on_move();
        };

        if reason == TerminationReason::TourFound {
            monitor.on_tour_found(state.tour());
        }
        stats.set_total_time(started.elapsed());
        monitor.on_exit_search();

        GreedyOutcome::new(state.into_tour(), reason, stats)
    }

    /// Returns the next cell of the walk, or `None` at a dead end.
    fn select(
        &mut self,
        board: &Board,
        state: &TourState,
        stats: &mut GreedyStatistics,
    ) -> Option<Position> {
        let current = state.current()?;

        let mut best = KnightMoves::new();
        let mut best_degree = usize::MAX;
        let mut scored = 0;
        for candidate in board.knight_moves(current) {
            if state.visited().contains(candidate) {
                continue;
            }
            scored += 1;
            let degree = board.degree(candidate, state.visited());
            if degree < best_degree {
                best.clear();
                best.push(candidate);
                best_degree = degree;
            } else if degree == best_degree {
                best.push(candidate);
            }
        }
        stats.on_candidates_scored(scored);

        if best.len() > 1 {
            stats.on_tie();
            if let Some(rng) = self.rng.as_mut() {
                return Some(best[rng.random_range(0..best.len())]);
            }
        }
        best.first().copied()
    }
}
