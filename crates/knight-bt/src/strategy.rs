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

//! `TourStrategy` implementations backed by the backtracking engines.

use crate::{
    backtrack::BacktrackSolver,
    grid::GridBacktrackSolver,
    monitor::{
        composite::CompositeTreeSearchMonitor, log::LogMonitor,
        tree_search_monitor::TreeSearchMonitor, wrapper::WrapperMonitor,
    },
    ordering::{fixed::FixedOrder, warnsdorff::WarnsdorffOrder},
    result::BacktrackOutcome,
};
use knight_model::{board::Board, position::Position};
use knight_search::{
    result::StrategyOutcome,
    strategy::{StrategyContext, TourStrategy},
};
use std::time::Duration;

pub const EXHAUSTIVE_NAME: &str = "Brute Force";
pub const EXHAUSTIVE_COLOR: &str = "#E57373";
pub const WARNSDORFF_DFS_NAME: &str = "Warnsdorff DFS";
pub const WARNSDORFF_DFS_COLOR: &str = "#9575CD";
pub const DIVIDE_AND_CONQUER_NAME: &str = "Divide and Conquer";
pub const DIVIDE_AND_CONQUER_COLOR: &str = "#64B5F6";

/// Runs `search` with the caller's monitor, plus a progress logger if one
/// is configured.
fn with_monitors<F>(
    context: StrategyContext<'_>,
    progress: Option<&mut LogMonitor>,
    search: F,
) -> StrategyOutcome
where
    F: FnOnce(&Board, Position, &mut dyn TreeSearchMonitor) -> BacktrackOutcome,
{
    let StrategyContext {
        board,
        start,
        monitor,
    } = context;
    let mut inner = WrapperMonitor::new(monitor);

    let outcome = match progress {
        Some(log) => {
            let mut composite = CompositeTreeSearchMonitor::new();
            composite.add_monitor(&mut inner);
            composite.add_monitor(log);
            search(&board, start, &mut composite)
        }
        None => search(&board, start, &mut inner),
    };
    outcome.into()
}

/// Plain depth-first backtracking in move generation order.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveBacktracking {
    solver: BacktrackSolver,
    progress: Option<LogMonitor>,
}

impl ExhaustiveBacktracking {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a progress line at most once per `interval`.
    #[inline]
    pub fn with_progress_log(mut self, interval: Duration) -> Self {
        self.progress = Some(LogMonitor::new(interval, 0xFFF));
        self
    }
}

impl TourStrategy for ExhaustiveBacktracking {
    fn name(&self) -> &str {
        EXHAUSTIVE_NAME
    }

    fn color(&self) -> &str {
        EXHAUSTIVE_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        let solver = &mut self.solver;
        with_monitors(context, self.progress.as_mut(), |board, start, monitor| {
            solver.solve(board, start, &mut FixedOrder::new(), monitor)
        })
    }
}

/// Depth-first backtracking trying the lowest-degree move first.
#[derive(Debug, Clone, Default)]
pub struct WarnsdorffBacktracking {
    solver: BacktrackSolver,
    progress: Option<LogMonitor>,
}

impl WarnsdorffBacktracking {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a progress line at most once per `interval`.
    #[inline]
    pub fn with_progress_log(mut self, interval: Duration) -> Self {
        self.progress = Some(LogMonitor::new(interval, 0xFFF));
        self
    }
}

impl TourStrategy for WarnsdorffBacktracking {
    fn name(&self) -> &str {
        WARNSDORFF_DFS_NAME
    }

    fn color(&self) -> &str {
        WARNSDORFF_DFS_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        let solver = &mut self.solver;
        with_monitors(context, self.progress.as_mut(), |board, start, monitor| {
            solver.solve(board, start, &mut WarnsdorffOrder::new(), monitor)
        })
    }
}

/// Grid backtracking, restricted to power-of-two boards with `N >= 4`.
///
/// Despite the name it does not split the board: it is a single-region
/// search that refuses other board sizes up front.
#[derive(Debug, Clone, Default)]
pub struct DivideAndConquer {
    solver: GridBacktrackSolver,
    progress: Option<LogMonitor>,
}

impl DivideAndConquer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a progress line at most once per `interval`.
    #[inline]
    pub fn with_progress_log(mut self, interval: Duration) -> Self {
        self.progress = Some(LogMonitor::new(interval, 0xFFF));
        self
    }
}

impl TourStrategy for DivideAndConquer {
    fn name(&self) -> &str {
        DIVIDE_AND_CONQUER_NAME
    }

    fn color(&self) -> &str {
        DIVIDE_AND_CONQUER_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        let solver = &mut self.solver;
        with_monitors(context, self.progress.as_mut(), |board, start, monitor| {
            solver.solve(board, start, monitor)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_search::{
        monitor::{no_op::NoOperationMonitor, step_limit::StepLimitMonitor},
        report::run_strategy,
        result::TerminationReason,
    };

    fn board(n: usize) -> Board {
        Board::new(n).unwrap()
    }

    fn strategies() -> Vec<Box<dyn TourStrategy>> {
        vec![
            Box::new(ExhaustiveBacktracking::new()),
            Box::new(WarnsdorffBacktracking::new()),
            Box::new(DivideAndConquer::new()),
        ]
    }

    #[test]
    fn test_names_and_colors() {
        let names: Vec<String> = strategies().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["Brute Force", "Warnsdorff DFS", "Divide and Conquer"]);
        for strategy in strategies() {
            assert!(strategy.color().starts_with('#'));
            assert_eq!(strategy.color().len(), 7);
        }
    }

    #[test]
    fn test_warnsdorff_dfs_five_by_five_from_center() {
        let b = board(5);
        let mut strategy = WarnsdorffBacktracking::new();
        let result =
            run_strategy(&mut strategy, &b, Position::new(2, 2), &mut NoOperationMonitor::new())
                .unwrap();

        assert!(result.success());
        assert_eq!(result.path().len(), 25);
        assert_eq!(result.path().first(), Some(Position::new(2, 2)));
        assert_eq!(result.path().steps()[0].to_string(), "(2,2,1)");
        for pair in result.path().steps().windows(2) {
            assert!(pair[0].position().is_knight_move_to(&pair[1].position()));
        }
    }

    #[test]
    fn test_exhaustive_five_by_five_is_deterministic() {
        let b = board(5);
        let mut strategy = ExhaustiveBacktracking::new();
        let mut monitor = NoOperationMonitor::new();
        let first = run_strategy(&mut strategy, &b, Position::new(0, 0), &mut monitor).unwrap();
        let second = run_strategy(&mut strategy, &b, Position::new(0, 0), &mut monitor).unwrap();
        assert!(first.success());
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_every_strategy_fails_on_three_by_three() {
        let b = board(3);
        for mut strategy in strategies() {
            let result = run_strategy(
                strategy.as_mut(),
                &b,
                Position::new(0, 0),
                &mut NoOperationMonitor::new(),
            )
            .unwrap();
            assert!(!result.success(), "{}", strategy.name());
            assert!(result.path().len() >= 1);
        }
    }

    #[test]
    fn test_divide_and_conquer_rejects_six_by_six() {
        let b = board(6);
        let mut strategy = DivideAndConquer::new();
        let result =
            run_strategy(&mut strategy, &b, Position::new(0, 0), &mut NoOperationMonitor::new())
                .unwrap();
        assert!(!result.success());
        assert_eq!(result.path().len(), 1);
        assert!(matches!(
            result.reason(),
            TerminationReason::PreconditionViolated(_)
        ));
    }

    #[test]
    fn test_divide_and_conquer_four_by_four_searches() {
        let b = board(4);
        let mut strategy = DivideAndConquer::new();
        let result =
            run_strategy(&mut strategy, &b, Position::new(0, 0), &mut NoOperationMonitor::new())
                .unwrap();
        assert!(!result.success());
        assert!(result.path().len() > 1);
        assert_eq!(result.reason(), &TerminationReason::InfeasibilityProven);
    }

    #[test]
    fn test_step_limit_aborts_every_strategy() {
        let b = board(8);
        for mut strategy in strategies() {
            let mut limit = StepLimitMonitor::new(5);
            let result =
                run_strategy(strategy.as_mut(), &b, Position::new(0, 0), &mut limit).unwrap();
            assert!(!result.success(), "{}", strategy.name());
            assert!(result.reason().is_aborted(), "{}", strategy.name());
        }
    }

    #[test]
    fn test_progress_log_does_not_change_result() {
        let b = board(5);
        let mut plain = WarnsdorffBacktracking::new();
        let mut logged = WarnsdorffBacktracking::new().with_progress_log(Duration::from_millis(1));
        let first =
            run_strategy(&mut plain, &b, Position::new(2, 2), &mut NoOperationMonitor::new())
                .unwrap();
        let second =
            run_strategy(&mut logged, &b, Position::new(2, 2), &mut NoOperationMonitor::new())
                .unwrap();
        assert_eq!(first.path(), second.path());
    }
}
