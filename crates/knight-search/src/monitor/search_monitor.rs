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

use knight_model::{board::Board, position::Position, tour::Tour};

/// The command a monitor gives to a running search.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Hooks a strategy calls while it searches.
///
/// Every strategy calls `on_enter_search` once before its first step and
/// `on_exit_search` once after its last. A "step" is one unit of work of
/// that strategy: a node for tree searches, an iteration for annealing,
/// an expansion for the frontier search. `search_command` is polled once
/// per step; a `Terminate` ends the run with `TerminationReason::Aborted`.
pub trait SearchMonitor {
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, board: &Board, start: Position);
    fn on_exit_search(&mut self);
    fn on_tour_found(&mut self, tour: &Tour);
    fn on_step(&mut self);
    fn search_command(&self) -> SearchCommand;
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_enter_search(&mut self, board: &Board, start: Position) {
        (**self).on_enter_search(board, start)
    }

    #[inline]
    fn on_exit_search(&mut self) {
        (**self).on_exit_search()
    }

    #[inline]
    fn on_tour_found(&mut self, tour: &Tour) {
        (**self).on_tour_found(tour)
    }

    #[inline(always)]
    fn on_step(&mut self) {
        (**self).on_step()
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        (**self).search_command()
    }
}
