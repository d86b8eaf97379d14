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

//! The pivot neighbour move.
//!
//! A neighbour of a walk keeps the walk up to a random pivot and regrows
//! the rest with a fresh random walk over the cells outside the kept prefix.
//! The start cell is always kept, and every neighbour is a legal walk.

use crate::construct::extend_randomly;
use knight_model::{board::Board, position::Position, tour::TourState};
use rand::Rng;

/// Draws a pivot in `1..len`, or `1` for walks shorter than two cells.
#[inline]
pub fn random_pivot<R>(len: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    if len < 2 {
        1
    } else {
        rng.random_range(1..len)
    }
}

/// Keeps `walk[..pivot]` and regrows it randomly. The start cell is kept
/// even for `pivot == 0`.
///
/// Returns `None` if `walk` is empty, since there is no start to keep.
pub fn regrow_from<R>(
    board: &Board,
    walk: &[Position],
    pivot: usize,
    rng: &mut R,
) -> Option<TourState>
where
    R: Rng + ?Sized,
{
    let (&start, rest) = walk.split_first()?;

    let kept = pivot.clamp(1, walk.len()) - 1;
    let mut state = TourState::new(board, start);
    for &position in &rest[..kept] {
        let extended = state.extend(position);
        debug_assert!(extended, "kept prefix revisits {}", position);
    }
    extend_randomly(board, &mut state, rng);
    Some(state)
}

/// A pivot neighbour of `walk`, or `None` if `walk` is empty.
pub fn pivot_neighbor<R>(board: &Board, walk: &[Position], rng: &mut R) -> Option<TourState>
where
    R: Rng + ?Sized,
{
    let pivot = random_pivot(walk.len(), rng);
    regrow_from(board, walk, pivot, rng)
}
