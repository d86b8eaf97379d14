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

use crate::ordering::move_ordering::{unvisited_moves, MoveOrdering};
use knight_model::{board::Board, board::KnightMoves, tour::TourState};

/// Tries moves in generation order. Turns the engine into plain exhaustive
/// backtracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOrder;

impl FixedOrder {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl MoveOrdering for FixedOrder {
    fn name(&self) -> &str {
        "FixedOrder"
    }

    #[inline]
    fn order_moves(&mut self, board: &Board, state: &TourState) -> KnightMoves {
        unvisited_moves(board, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_model::position::Position;

    #[test]
    fn test_skips_visited_and_keeps_generation_order() {
        let board = Board::new(5).unwrap();
        let mut state = TourState::new(&board, Position::new(0, 1));
        state.extend(Position::new(2, 2));
        // Back at (2,2): (0,1) is visited, the rest follow generation order.
        let moves = FixedOrder::new().order_moves(&board, &state);
        let expected: Vec<Position> = [(0, 3), (1, 0), (1, 4), (3, 0), (3, 4), (4, 1), (4, 3)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(moves.to_vec(), expected);
    }
}
