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

//! Tour validation.
//!
//! `validate_tour` is the single authority on whether a path is a knight's
//! tour. Strategies may believe they succeeded; the reporter asks this module.
//! A path is valid iff it has exactly `N * N` steps, every step is on the
//! board and numbered in order, every consecutive pair is a knight move and
//! no cell repeats. Every violation found is listed, not just the first.

use crate::{
    board::Board,
    position::{Position, Step},
};
use rustc_hash::FxHashSet;

/// A single problem found in a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourIssue {
    /// The path does not have `N * N` steps.
    WrongLength { actual: usize, expected: usize },
    /// A step lies outside the board.
    OffBoard { position: Position, size: usize },
    /// Two consecutive steps are not a knight move apart.
    InvalidMove { from: Position, to: Position },
    /// A cell occurs more than once.
    Duplicate { position: Position },
    /// The step at `index` does not carry the number `index + 1`.
    BrokenNumbering {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for TourIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourIssue::WrongLength { actual, expected } => {
                write!(f, "Tour has {} steps, expected {}", actual, expected)
            }
            TourIssue::OffBoard { position, size } => {
                write!(f, "Position {} is outside the {}x{} board", position, size, size)
            }
            TourIssue::InvalidMove { from, to } => {
                write!(f, "Invalid knight move from {} to {}", from, to)
            }
            TourIssue::Duplicate { position } => {
                write!(f, "Position {} visited multiple times", position)
            }
            TourIssue::BrokenNumbering {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Step at index {} is numbered {}, expected {}",
                index, actual, expected
            ),
        }
    }
}

/// The result of validating a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourValidation {
    issues: Vec<TourIssue>,
}

impl TourValidation {
    /// Returns `true` if no issue was found.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns every issue found, in path order.
    #[inline]
    pub fn issues(&self) -> &[TourIssue] {
        &self.issues
    }
}

impl std::fmt::Display for TourValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "Valid tour");
        }
        writeln!(f, "Invalid tour ({} issues):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Validates `steps` as a knight's tour on `board`.
pub fn validate_tour(board: &Board, steps: &[Step]) -> TourValidation {
    let mut issues = Vec::new();

    if steps.len() != board.num_cells() {
        issues.push(TourIssue::WrongLength {
            actual: steps.len(),
            expected: board.num_cells(),
        });
    }

    let mut seen: FxHashSet<Position> = FxHashSet::default();
    let mut reported: FxHashSet<Position> = FxHashSet::default();
    seen.reserve(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let position = step.position();

        if step.step_number() != index + 1 {
            issues.push(TourIssue::BrokenNumbering {
                index,
                expected: index + 1,
                actual: step.step_number(),
            });
        }

        if !board.contains(position) {
            issues.push(TourIssue::OffBoard {
                position,
                size: board.size(),
            });
        }

        if index > 0 {
            let from = steps[index - 1].position();
            if !from.is_knight_move_to(&position) {
                issues.push(TourIssue::InvalidMove { from, to: position });
            }
        }

        if !seen.insert(position) && reported.insert(position) {
            issues.push(TourIssue::Duplicate { position });
        }
    }

    TourValidation { issues }
}

/// Shorthand for `validate_tour(board, steps).is_valid()`.
#[inline]
pub fn is_valid_tour(board: &Board, steps: &[Step]) -> bool {
    validate_tour(board, steps).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Tour;
    use proptest::prelude::*;

    fn five_by_five_tour() -> Tour {
        // A 5x5 tour from the corner, written as rows of step numbers.
        let grid: [[usize; 5]; 5] = [
            [1, 14, 9, 20, 3],
            [24, 19, 2, 15, 10],
            [13, 8, 25, 4, 21],
            [18, 23, 6, 11, 16],
            [7, 12, 17, 22, 5],
        ];
        let mut cells = vec![Position::new(0, 0); 25];
        for (r, row) in grid.iter().enumerate() {
            for (c, &n) in row.iter().enumerate() {
                cells[n - 1] = Position::new(r, c);
            }
        }
        Tour::from_positions(cells)
    }

    #[test]
    fn test_known_five_by_five_tour_is_valid() {
        let board = Board::new(5).unwrap();
        let tour = five_by_five_tour();
        let report = validate_tour(&board, tour.steps());
        assert!(report.is_valid(), "{report}");
        assert_eq!(report.to_string(), "Valid tour");
    }

    #[test]
    fn test_swapping_start_neighbours_breaks_the_tour() {
        let board = Board::new(5).unwrap();
        let mut cells: Vec<Position> = five_by_five_tour().positions().collect();
        cells.swap(0, 1);
        let report = validate_tour(&board, Tour::from_positions(cells).steps());
        assert!(!report.is_valid());
        assert!(report.to_string().contains("Invalid knight move"));
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(1).unwrap();
        let tour = Tour::starting_at(Position::new(0, 0));
        assert!(is_valid_tour(&board, tour.steps()));
    }

    #[test]
    fn test_wrong_length_message() {
        let board = Board::new(5).unwrap();
        let tour = five_by_five_tour().prefix(24);
        let report = validate_tour(&board, tour.steps());
        assert_eq!(
            report.issues(),
            &[TourIssue::WrongLength {
                actual: 24,
                expected: 25
            }]
        );
        assert_eq!(report.issues()[0].to_string(), "Tour has 24 steps, expected 25");
    }

    #[test]
    fn test_invalid_move_lists_both_endpoints() {
        let board = Board::new(3).unwrap();
        let tour = Tour::from_positions([(0, 0), (0, 1)].map(Position::from));
        let report = validate_tour(&board, tour.steps());
        let invalid: Vec<_> = report
            .issues()
            .iter()
            .filter(|i| matches!(i, TourIssue::InvalidMove { .. }))
            .collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(
            invalid[0].to_string(),
            "Invalid knight move from (0,0) to (0,1)"
        );
    }

    #[test]
    fn test_duplicate_reported_once_per_cell() {
        let board = Board::new(5).unwrap();
        let tour = Tour::from_positions([(0, 0), (1, 2), (0, 0), (1, 2), (0, 0)].map(Position::from));
        let report = validate_tour(&board, tour.steps());
        let duplicates: Vec<String> = report
            .issues()
            .iter()
            .filter(|i| matches!(i, TourIssue::Duplicate { .. }))
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            duplicates,
            vec![
                "Position (0,0) visited multiple times".to_string(),
                "Position (1,2) visited multiple times".to_string(),
            ]
        );
    }

    #[test]
    fn test_off_board_and_numbering_issues() {
        let board = Board::new(3).unwrap();
        let steps = vec![
            Step::new(Position::new(0, 0), 1),
            Step::new(Position::new(2, 1), 3),
            Step::new(Position::new(4, 2), 3),
        ];
        let report = validate_tour(&board, &steps);
        assert!(report.issues().contains(&TourIssue::BrokenNumbering {
            index: 1,
            expected: 2,
            actual: 3
        }));
        assert!(report.issues().contains(&TourIssue::OffBoard {
            position: Position::new(4, 2),
            size: 3
        }));
        assert!(report.to_string().starts_with("Invalid tour"));
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let board = Board::new(4).unwrap();
        let report = validate_tour(&board, &[]);
        assert_eq!(
            report.issues(),
            &[TourIssue::WrongLength {
                actual: 0,
                expected: 16
            }]
        );
    }

    proptest! {
        #[test]
        fn prop_swapped_tour_only_breaks_moves(i in 0usize..25, j in 0usize..25) {
            prop_assume!(i != j);
            let board = Board::new(5).unwrap();
            let mut cells: Vec<Position> = five_by_five_tour().positions().collect();
            cells.swap(i, j);
            let swapped = Tour::from_positions(cells);
            // A swap keeps the length and the cell set, so the only
            // possible issue is an illegal move.
            let report = validate_tour(&board, swapped.steps());
            prop_assert!(report
                .issues()
                .iter()
                .all(|issue| matches!(issue, TourIssue::InvalidMove { .. })),
                "expected only InvalidMove issues");
        }

        #[test]
        fn prop_truncated_tour_reports_only_length(len in 0usize..25) {
            let board = Board::new(5).unwrap();
            let tour = five_by_five_tour().prefix(len);
            let report = validate_tour(&board, tour.steps());
            prop_assert_eq!(
                report.issues(),
                &[TourIssue::WrongLength { actual: len, expected: 25 }][..]
            );
        }
    }
}
