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

//! Cells and tour steps.
//!
//! `Position` is a plain `(row, col)` pair with value equality. `Step` annotates a
//! position with its 1-based order inside a tour. Both are small `Copy` values; a
//! step is never mutated in place, a renumbered tour produces new steps.

use crate::error::StepError;
use serde::{Deserialize, Serialize};

/// A cell on the board, 0-indexed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this position.
    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this position.
    #[inline(always)]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Applies a signed offset to this position.
    ///
    /// Returns `None` if either coordinate would become negative.
    /// The result is not checked against any board size.
    #[inline]
    pub fn offset(&self, delta_row: isize, delta_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(delta_row)?;
        let col = self.col.checked_add_signed(delta_col)?;
        Some(Self { row, col })
    }

    /// Returns `true` if `other` is exactly one knight move away from `self`,
    /// i.e. the row and column deltas are `{1, 2}` in either order.
    #[inline]
    pub fn is_knight_move_to(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Returns `true` if the two positions denote the same cell.
#[inline(always)]
pub fn same_position(a: &Position, b: &Position) -> bool {
    a == b
}

/// Returns `true` if `from -> to` is a legal knight move (ignoring board bounds).
#[inline(always)]
pub fn is_knight_move(from: &Position, to: &Position) -> bool {
    from.is_knight_move_to(to)
}

/// A position annotated with its 1-based order in a tour.
///
/// Deserializing a step with number 0 fails.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct Step {
    position: Position,
    step_number: usize,
}

#[derive(Deserialize)]
struct RawStep {
    position: Position,
    step_number: usize,
}

impl TryFrom<RawStep> for Step {
    type Error = StepError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        if raw.step_number == 0 {
            return Err(StepError::ZeroStepNumber {
                position: raw.position,
            });
        }
        Ok(Self::new(raw.position, raw.step_number))
    }
}

impl Step {
    /// Creates a new step.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `step_number` is zero.
    #[inline]
    pub fn new(position: Position, step_number: usize) -> Self {
        debug_assert!(
            step_number >= 1,
            "called `Step::new` with step number 0; step numbers are 1-based"
        );
        Self {
            position,
            step_number,
        }
    }

    /// Returns the position of this step.
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the row of this step.
    #[inline(always)]
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Returns the column of this step.
    #[inline(always)]
    pub fn col(&self) -> usize {
        self.position.col()
    }

    /// Returns the 1-based step number.
    #[inline(always)]
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns a copy of this step carrying a different step number.
    #[inline]
    pub fn renumbered(&self, step_number: usize) -> Self {
        Self::new(self.position, step_number)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.position.row(),
            self.position.col(),
            self.step_number
        )
    }
}
