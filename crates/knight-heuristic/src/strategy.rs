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

//! `TourStrategy` implementations for the heuristic searches.

use crate::{frontier::FrontierSearch, greedy::GreedyTraversal};
use knight_search::{
    result::StrategyOutcome,
    strategy::{StrategyContext, TourStrategy},
};

pub const GREEDY_NAME: &str = "Warnsdorff";
pub const GREEDY_COLOR: &str = "#FFB74D";
/// Kept for continuity with existing result consumers; the search is not
/// an admissible A*.
pub const FRONTIER_NAME: &str = "A* Search";
pub const FRONTIER_COLOR: &str = "#6D28D9";

impl TourStrategy for GreedyTraversal {
    fn name(&self) -> &str {
        GREEDY_NAME
    }

    fn color(&self) -> &str {
        GREEDY_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        self.traverse(&context.board, context.start, context.monitor)
            .into()
    }
}

impl TourStrategy for FrontierSearch {
    fn name(&self) -> &str {
        FRONTIER_NAME
    }

    fn color(&self) -> &str {
        FRONTIER_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        self.search(&context.board, context.start, context.monitor)
            .into()
    }
}
