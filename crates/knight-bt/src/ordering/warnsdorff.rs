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

/// Warnsdorff's rule: try the move with the fewest onward unvisited moves
/// first. Ties keep generation order (the sort is stable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarnsdorffOrder;

impl WarnsdorffOrder {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl MoveOrdering for WarnsdorffOrder {
    fn name(&self) -> &str {
        "WarnsdorffOrder"
    }

    #[inline]
    fn order_moves(&mut self, board: &Board, state: &TourState) -> KnightMoves {
        let mut moves = unvisited_moves(board, state);
        let visited = state.visited();
        moves.sort_by_cached_key(|&to| board.degree(to, visited));
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_model::position::Position;

    #[test]
    fn test_orders_by_degree_ascending() {
        let board = Board::new(8).unwrap();
        let state = TourState::new(&board, Position::new(2, 2));
        let moves = WarnsdorffOrder::new().order_moves(&board, &state);
        let degrees: Vec<usize> = moves
            .iter()
            .map(|&m| board.degree(m, state.visited()))
            .collect();
        let mut sorted = degrees.clone();
        sorted.sort();
        assert_eq!(degrees, sorted);
        // (0,1) and (1,0) both have degree 2 (the start is visited);
        // generation order puts (0,1) first.
        assert_eq!(moves[0], Position::new(0, 1));
        assert_eq!(moves[1], Position::new(1, 0));
    }

    #[test]
    fn test_same_candidates_as_fixed_order() {
        let board = Board::new(6).unwrap();
        let state = TourState::new(&board, Position::new(3, 2));
        let mut warnsdorff = WarnsdorffOrder::new().order_moves(&board, &state).to_vec();
        let mut fixed = crate::ordering::fixed::FixedOrder::new()
            .order_moves(&board, &state)
            .to_vec();
        warnsdorff.sort();
        fixed.sort();
        assert_eq!(warnsdorff, fixed);
    }
}
