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

//! Random-walk construction.

use knight_model::{
    board::{Board, KnightMoves},
    position::Position,
    tour::TourState,
};
use rand::Rng;

/// Extends `state` with uniformly random unvisited knight moves until the
/// walk is stuck or covers the board. Returns the number of moves added.
pub fn extend_randomly<R>(board: &Board, state: &mut TourState, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let mut added = 0;
    while !state.is_complete(board) {
        let Some(current) = state.current() else {
            break;
        };
        let candidates: KnightMoves = board
            .knight_moves(current)
            .into_iter()
            .filter(|&next| !state.visited().contains(next))
            .collect();
        if candidates.is_empty() {
            break;
        }
        let next = candidates[rng.random_range(0..candidates.len())];
        let extended = state.extend(next);
        debug_assert!(extended, "random walk selected visited cell {}", next);
        added += 1;
    }
    added
}

/// A random walk from `start`.
pub fn random_walk<R>(board: &Board, start: Position, rng: &mut R) -> TourState
where
    R: Rng + ?Sized,
{
    let mut state = TourState::new(board, start);
    extend_randomly(board, &mut state, rng);
    state
}
