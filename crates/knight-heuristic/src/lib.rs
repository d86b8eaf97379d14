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

//! Knight-Heuristic: non-backtracking and best-first tour search
//!
//! Two strategies ranked by the Warnsdorff degree of a cell (the number of
//! unvisited cells one knight move away):
//!
//! - `greedy::GreedyTraversal` commits to the lowest-degree move at every
//!   step and never undoes a move. It is fast and often succeeds, but ends
//!   with `TerminationReason::DeadEnd` when the walk gets stuck.
//! - `frontier::FrontierSearch` keeps a priority queue of partial paths and
//!   always extends the one whose last cell has the lowest degree. The degree
//!   is not an admissible bound, so this is a prioritized frontier search and
//!   not A* in the optimality sense.
//!
//! Both are exposed as `knight_search::strategy::TourStrategy` implementations
//! through the `strategy` module.

pub mod frontier;
pub mod greedy;
pub mod result;
pub mod stats;
pub mod strategy;
