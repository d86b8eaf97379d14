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

//! Tour scoring for the annealing search. Higher scores are better.

use knight_model::{board::Board, position::Position};

/// Scores a walk.
///
/// An evaluator must prefer longer walks made only of legal knight moves,
/// and must penalize an illegal transition by more than one extra cell is
/// worth.
pub trait TourEvaluator: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    fn score(&self, board: &Board, walk: &[Position]) -> i64;
}

/// One point per cell, one per legal move, minus five per illegal move, and
/// a bonus for covering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightMoveFitness {
    legal_move_reward: i64,
    illegal_move_penalty: i64,
    completion_bonus: i64,
}

impl Default for KnightMoveFitness {
    fn default() -> Self {
        Self {
            legal_move_reward: 1,
            illegal_move_penalty: 5,
            completion_bonus: 100,
        }
    }
}

impl KnightMoveFitness {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The score of a complete tour of `board`.
    #[inline]
    pub fn complete_tour_score(&self, board: &Board) -> i64 {
        let cells = board.num_cells() as i64;
        cells + (cells - 1) * self.legal_move_reward + self.completion_bonus
    }
}

impl TourEvaluator for KnightMoveFitness {
    fn name(&self) -> &str {
        "KnightMoveFitness"
    }

    fn score(&self, board: &Board, walk: &[Position]) -> i64 {
        let mut score = walk.len() as i64;
        for pair in walk.windows(2) {
            if pair[0].is_knight_move_to(&pair[1]) {
                score += self.legal_move_reward;
            } else {
                score -= self.illegal_move_penalty;
            }
        }
        if walk.len() == board.num_cells() {
            score += self.completion_bonus;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn test_legal_walk_scores_two_per_move() {
        let board = Board::new(5).unwrap();
        let fitness = KnightMoveFitness::new();
        assert_eq!(fitness.score(&board, &walk(&[(0, 0)])), 1);
        assert_eq!(fitness.score(&board, &walk(&[(0, 0), (1, 2), (2, 4)])), 5);
    }

    #[test]
    fn test_illegal_move_is_penalized() {
        let board = Board::new(5).unwrap();
        let fitness = KnightMoveFitness::new();
        let legal = fitness.score(&board, &walk(&[(0, 0), (1, 2)]));
        let illegal = fitness.score(&board, &walk(&[(0, 0), (0, 1), (1, 3)]));
        assert_eq!(illegal, 3 - 5 + 1);
        assert!(illegal < legal);
    }

    #[test]
    fn test_complete_tour_score() {
        let board = Board::new(1).unwrap();
        let fitness = KnightMoveFitness::new();
        assert_eq!(fitness.score(&board, &walk(&[(0, 0)])), 101);
        assert_eq!(fitness.complete_tour_score(&board), 101);
        assert_eq!(fitness.complete_tour_score(&Board::new(5).unwrap()), 25 + 24 + 100);
    }
}
