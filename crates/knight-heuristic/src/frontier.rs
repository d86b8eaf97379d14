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

//! Best-first frontier search.
//!
//! Every frontier entry owns a full copy of its partial path and visited set.
//! The entry whose last cell has the lowest Warnsdorff degree is extended
//! next; equal degrees are served in insertion order. Popping a complete path
//! ends the search. When the frontier runs dry the longest path popped is
//! returned instead.
//!
//! Memory grows with the frontier, roughly `entries * N * N`, and this is the
//! limit on the board sizes the search can handle. An optional expansion
//! limit bounds the run.

use crate::{result::FrontierOutcome, stats::FrontierStatistics};
use knight_model::{
    board::Board,
    position::Position,
    tour::TourState,
};
use knight_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::TerminationReason,
};
use std::{cmp::Ordering, collections::BinaryHeap};

/// A partial path waiting on the frontier.
#[derive(Clone, Debug)]
struct FrontierEntry {
    degree: usize,
    sequence: u64,
    state: TourState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `BinaryHeap` is a max-heap: the lowest degree, then the oldest entry,
// compares greatest.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .degree
            .cmp(&self.degree)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrontierSearch {
    expansion_limit: Option<u64>,
}

impl FrontierSearch {
    #[inline]
    pub fn new() -> Self {
        Self {
            expansion_limit: None,
        }
    }

    /// Stops the search with `Aborted` after `limit` expansions.
    #[inline]
    pub fn with_expansion_limit(limit: u64) -> Self {
        Self {
            expansion_limit: Some(limit),
        }
    }

    #[inline]
    pub fn expansion_limit(&self) -> Option<u64> {
        self.expansion_limit
    }

    /// Searches for a tour of `board` from `start`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    pub fn search<S>(&self, board: &Board, start: Position, monitor: &mut S) -> FrontierOutcome
    where
        S: SearchMonitor + ?Sized,
    {
        debug_assert!(
            board.contains(start),
            "called `FrontierSearch::search` with start {} outside {}",
            start,
            board
        );

        let started = std::time::Instant::now();
        let mut stats = FrontierStatistics::default();
        monitor.on_enter_search(board, start);

        let root = TourState::new(board, start);
        let mut longest = root.tour().clone();
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        frontier.push(FrontierEntry {
            degree: board.degree(start, root.visited()),
            sequence,
            state: root,
        });
        stats.on_push(frontier.len());

        let reason = loop {
            if frontier.is_empty() {
                break TerminationReason::FrontierExhausted;
            }

            monitor.on_step();
            if let SearchCommand::Terminate(msg) = monitor.search_command() {
                break TerminationReason::Aborted(msg);
            }
            if let Some(limit) = self.expansion_limit {
                if stats.expansions >= limit {
                    break TerminationReason::Aborted(format!(
                        "expansion limit of {} reached",
                        limit
                    ));
                }
            }

            let Some(entry) = frontier.pop() else {
                break TerminationReason::FrontierExhausted;
            };
            stats.on_expansion();
            stats.on_path_length(entry.state.len());

            if entry.state.is_complete(board) {
                longest = entry.state.into_tour();
                break TerminationReason::TourFound;
            }
            if entry.state.len() > longest.len() {
                longest = entry.state.tour().clone();
            }

            let Some(current) = entry.state.current() else {
                continue;
            };
            for next in board.knight_moves(current) {
                if entry.state.visited().contains(next) {
                    continue;
                }
                let mut child = entry.state.clone();
                let extended = child.extend(next);
                debug_assert!(extended, "frontier expanded visited cell {}", next);
                sequence += 1;
                frontier.push(FrontierEntry {
                    degree: board.degree(next, child.visited()),
                    sequence,
                    state: child,
                });
                stats.on_push(frontier.len());
            }
        };

        if reason == TerminationReason::TourFound {
            monitor.on_tour_found(&longest);
        }
        stats.set_total_time(started.elapsed());
        monitor.on_exit_search();

        log::debug!(
            "frontier search finished after {} expansions ({} entries left)",
            stats.expansions,
            frontier.len()
        );

        FrontierOutcome::new(longest, reason, stats)
    }
}
