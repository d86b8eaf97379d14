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

//! The N×N board and knight move generation.
//!
//! `Board` is the only fallible constructor in the model. Once a board exists,
//! every helper on it is total: positions outside the board are filtered or
//! reported as `false`, never panicked on.

use crate::{error::BoardError, position::Position, tour::VisitedSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The eight knight offsets `(delta_row, delta_col)` in generation order.
///
/// Every order-sensitive strategy relies on this exact order; changing it
/// changes which tour a deterministic search returns first.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The inline move list returned by [`Board::knight_moves`].
pub type KnightMoves = SmallVec<[Position; 8]>;

/// A validated square board of side length `N`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Board {
    size: usize,
    num_cells: usize,
}

impl Board {
    /// Creates a new board with side length `size`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidSize` if `size` is zero, and
    /// `BoardError::TooLarge` if `size * size` overflows `usize`.
    #[inline]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        let num_cells = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
        Ok(Self { size, num_cells })
    }

    /// Returns the side length `N`.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells `N * N`, i.e. the length of a complete tour.
    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Returns `true` if `N` is a power of two.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        self.size.is_power_of_two()
    }

    /// Returns `true` if `position` lies inside `[0, N)²`.
    #[inline(always)]
    pub fn contains(&self, position: Position) -> bool {
        position.row() < self.size && position.col() < self.size
    }

    /// Returns the canonical cell index `row * N + col`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `position` is outside the board.
    #[inline(always)]
    pub fn cell_index(&self, position: Position) -> usize {
        debug_assert!(
            self.contains(position),
            "called `Board::cell_index` with position {} outside the {}x{} board",
            position,
            self.size,
            self.size
        );
        position.row() * self.size + position.col()
    }

    /// Returns the position for a canonical cell index, or `None` if the
    /// index is out of range.
    #[inline]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        if index >= self.num_cells {
            return None;
        }
        Some(Position::new(index / self.size, index % self.size))
    }

    /// Checks that `start` is a legal starting square.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::StartOutOfBounds` if `start` is not on the board.
    #[inline]
    pub fn check_start(&self, start: Position) -> Result<(), BoardError> {
        if self.contains(start) {
            Ok(())
        } else {
            Err(BoardError::StartOutOfBounds {
                position: start,
                size: self.size,
            })
        }
    }

    /// Returns the knight moves from `from` that stay on the board, in the
    /// order of [`KNIGHT_OFFSETS`].
    #[inline]
    pub fn knight_moves(&self, from: Position) -> KnightMoves {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.contains(to))
            .collect()
    }

    /// Returns the number of knight moves from `position` that land on a
    /// cell not yet in `visited`. This is the Warnsdorff ranking key.
    #[inline]
    pub fn degree(&self, position: Position, visited: &VisitedSet) -> usize {
        self.degree_by(position, |p| visited.contains(p))
    }

    /// Like [`Board::degree`], but with an arbitrary membership predicate.
    #[inline]
    pub fn degree_by<F>(&self, position: Position, mut is_visited: F) -> usize
    where
        F: FnMut(Position) -> bool,
    {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| position.offset(dr, dc))
            .filter(|&to| self.contains(to) && !is_visited(to))
            .count()
    }

    /// Returns an iterator over all cells in row-major order.
    #[inline]
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.num_cells).map(move |i| Position::new(i / self.size, i % self.size))
    }
}

impl TryFrom<usize> for Board {
    type Error = BoardError;

    #[inline]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Board> for usize {
    #[inline]
    fn from(board: Board) -> Self {
        board.size
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({}x{})", self.size, self.size)
    }
}
