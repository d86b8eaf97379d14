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

//! Knight-BT: backtracking search for the knight's tour
//!
//! Depth-first strategies that extend a path one knight move at a time and
//! undo moves on dead ends. All of them run on explicit heap-allocated stacks,
//! so a search of depth `N * N` never touches the thread stack.
//!
//! Core flow
//! - Build a `knight_model::board::Board` and pick a start.
//! - Choose an `ordering::MoveOrdering` (which candidate to try first).
//! - Run `backtrack::BacktrackSolver` directly, or use a ready-made strategy
//!   from `strategy` through `knight_search::report::run_strategy`.
//!
//! Design highlights
//! - One path buffer with strict push-before-descend and pop-on-backtrack.
//! - Deterministic: fixed move generation order and stable sorting.
//! - On failure the longest partial path reached is returned as a diagnostic.
//!
//! Module map
//! - `backtrack`: the list-based engine (exhaustive and Warnsdorff DFS).
//! - `grid`: the grid-based engine restricted to power-of-two boards.
//! - `ordering`: move orderings.
//! - `monitor`: tree-search monitors (log, composite, wrapper).
//! - `result`: engine outcomes with termination reasons.
//! - `stats`: counters and timing.
//! - `strategy`: `TourStrategy` implementations.

pub mod backtrack;
pub mod grid;
pub mod monitor;
pub mod ordering;
pub mod result;
mod stack;
pub mod stats;
pub mod strategy;
