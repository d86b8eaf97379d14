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

use knight_model::{board::Board, board::KnightMoves, tour::TourState};

pub trait MoveOrdering {
    /// Returns the name of the ordering.
    fn name(&self) -> &str;

    /// Returns the unvisited knight moves from the current cell of `state`,
    /// best candidate first.
    fn order_moves(&mut self, board: &Board, state: &TourState) -> KnightMoves;
}

impl std::fmt::Debug for dyn MoveOrdering + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MoveOrdering({})", self.name())
    }
}

/// The unvisited moves from the current cell in generation order.
#[inline]
pub(crate) fn unvisited_moves(board: &Board, state: &TourState) -> KnightMoves {
    match state.current() {
        Some(current) => {
            let mut moves = board.knight_moves(current);
            moves.retain(|to| !state.visited().contains(*to));
            moves
        }
        None => KnightMoves::new(),
    }
}
