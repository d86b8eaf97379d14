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

//! # Knight Model
//!
//! **The core domain model for the knight's tour search strategies.**
//!
//! This crate defines the data structures every strategy works on. It is the
//! data interchange layer between the caller (board size and start square) and
//! the search crates (`knight_bt`, `knight_heuristic`, `knight_ls`).
//!
//! ## Architecture
//!
//! * **`position`**: `Position` (a cell) and `Step` (a cell with its 1-based order in a tour).
//! * **`board`**: `Board`, the validated N×N board with knight move generation and Warnsdorff degrees.
//! * **`tour`**: `Tour` (the ordered path), `VisitedSet` (bitset membership) and `TourState`,
//!   which keeps the two consistent while a search extends and retracts a path.
//! * **`validation`**: the tour validator, the correctness oracle for every strategy.
//! * **`error`**: input validation errors, distinct from "no tour found".
//!
//! ## Design Philosophy
//!
//! 1.  **Failure is data**: a search that finds no tour is not an error. Only malformed input
//!     (a zero-sized board, a start square off the board) produces a `BoardError`.
//! 2.  **Fixed move order**: knight moves are always generated in the same order, so
//!     deterministic strategies return identical tours for identical inputs.
//! 3.  **No hidden allocation in hot loops**: move lists are inline (`SmallVec`) and the
//!     visited set is a flat bitset indexed by `row * N + col`.

pub mod board;
pub mod error;
pub mod position;
pub mod tour;
pub mod validation;
