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

use crate::position::Position;

/// Errors raised for malformed board input.
///
/// These are distinct from a search that simply finds no tour: a strategy
/// never returns a `BoardError`, it reports failure through its outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board size is zero.
    #[error("board size must be positive, got {0}")]
    InvalidSize(usize),
    /// The number of cells `N * N` does not fit into `usize`.
    #[error("board size {0} is too large: {0}x{0} cells overflow the index space")]
    TooLarge(usize),
    /// The start position lies outside the board.
    #[error("start position {position} is outside the {size}x{size} board")]
    StartOutOfBounds { position: Position, size: usize },
}

/// Errors raised for a malformed tour step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("step at {position} has number 0; step numbers are 1-based")]
    ZeroStepNumber { position: Position },
}
