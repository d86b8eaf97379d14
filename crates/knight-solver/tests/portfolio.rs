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

//! End-to-end runs of the portfolio solver.

use knight_bt::strategy::{ExhaustiveBacktracking, WarnsdorffBacktracking};
use knight_heuristic::greedy::GreedyTraversal;
use knight_ls::config::AnnealingConfig;
use knight_model::{board::Board, position::Position, validation::is_valid_tour};
use knight_search::{
    monitor::no_op::NoOperationMonitor, report::run_strategy, result::TerminationReason,
};
use knight_solver::{
    config::{SolverConfig, DEFAULT_FRONTIER_EXPANSION_LIMIT},
    solver::{Solver, SolverBuilder},
};
use proptest::prelude::*;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

fn quick_config() -> SolverConfig {
    SolverConfig::default()
        .with_seed(7)
        .with_annealing(
            AnnealingConfig::default()
                .with_cooling_rate(0.8)
                .with_iterations_per_temperature(20),
        )
        .with_frontier_expansion_limit(100_000)
}

fn quick_solver() -> Solver<'static> {
    let mut builder = SolverBuilder::new().with_step_limit(200_000);
    for strategy in quick_config().portfolio().unwrap() {
        builder = builder.add_strategy_boxed(strategy);
    }
    builder.build()
}

#[test]
fn default_portfolio_on_five_by_five() {
    let mut solver = quick_solver();
    let comparison = solver.solve(5, Position::new(2, 2)).unwrap();

    assert_eq!(comparison.results().len(), 6);
    assert_eq!(comparison.statistics().strategies_run, 6);

    let dfs = comparison.result("Warnsdorff DFS").unwrap();
    assert!(dfs.success());
    assert_eq!(dfs.path().len(), 25);

    let grid = comparison.result("Divide and Conquer").unwrap();
    assert!(!grid.success());
    assert!(matches!(
        grid.reason(),
        TerminationReason::PreconditionViolated(_)
    ));

    for result in comparison.results() {
        assert_eq!(
            result.success(),
            is_valid_tour(comparison.board(), result.path().steps()),
            "{result}"
        );
    }

    let fastest = comparison.fastest_complete().unwrap();
    assert!(fastest.success());
    assert!(comparison
        .complete()
        .all(|r| r.execution_time() >= fastest.execution_time()));
    assert_eq!(
        comparison.statistics().tours_found,
        comparison.complete().count()
    );

    let table = comparison.to_string();
    for result in comparison.results() {
        assert!(table.contains(result.name()), "{table}");
    }
    assert!(table.contains("Fastest complete tour:"));
}

#[test]
fn comparison_serializes_to_json() {
    let mut solver = SolverBuilder::new()
        .add_strategy(GreedyTraversal::new())
        .build();
    let comparison = solver.solve(5, Position::new(0, 0)).unwrap();
    let json = serde_json::to_string(&comparison).unwrap();
    assert!(json.contains("\"execution_time_ms\""));
    assert!(json.contains("\"Warnsdorff\""));
    assert!(json.contains("\"success\":true"));
}

#[test]
fn no_tour_on_three_by_three() {
    let mut solver = quick_solver();
    let comparison = solver.solve(3, Position::new(0, 0)).unwrap();
    assert_eq!(comparison.results().len(), 6);
    assert_eq!(comparison.complete().count(), 0);
    assert!(comparison.fastest_complete().is_none());
    assert!(comparison
        .to_string()
        .contains("No strategy found a complete tour"));
}

#[test]
fn time_limit_stops_a_hopeless_search() {
    // An odd board has no tour from a cell of the minority colour.
    let mut solver = SolverBuilder::new()
        .with_time_limit(Duration::from_millis(50))
        .add_strategy(ExhaustiveBacktracking::new())
        .build();
    let comparison = solver.solve(7, Position::new(0, 1)).unwrap();
    let result = &comparison.results()[0];
    assert!(!result.success());
    assert_eq!(
        result.reason(),
        &TerminationReason::Aborted("time limit reached".to_string())
    );
    assert_eq!(comparison.statistics().aborted, 1);
}

#[test]
fn interrupt_handle_stops_running_strategies() {
    let mut solver = SolverBuilder::new()
        .add_strategy(ExhaustiveBacktracking::new())
        .add_strategy(WarnsdorffBacktracking::new())
        .build();
    let stop = solver.interrupt_handle();
    let done = Arc::new(AtomicBool::new(false));

    let raiser = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(20));
                stop.store(true, Ordering::Relaxed);
            }
        })
    };

    let comparison = solver.solve(7, Position::new(0, 1));
    done.store(true, Ordering::Relaxed);
    raiser.join().unwrap();

    let comparison = comparison.unwrap();
    for result in comparison.results() {
        assert_eq!(
            result.reason(),
            &TerminationReason::Aborted("Interrupt signal received".to_string()),
            "{result}"
        );
    }
}

#[test]
fn default_frontier_search_is_bounded() {
    let mut strategies = SolverConfig::default().portfolio().unwrap();
    let frontier = strategies.last_mut().unwrap();
    assert_eq!(frontier.name(), "A* Search");

    let board = Board::new(8).unwrap();
    let result = run_strategy(
        frontier.as_mut(),
        &board,
        Position::new(0, 1),
        &mut NoOperationMonitor::new(),
    )
    .unwrap();
    if !result.success() {
        assert_eq!(
            result.reason(),
            &TerminationReason::Aborted(format!(
                "expansion limit of {DEFAULT_FRONTIER_EXPANSION_LIMIT} reached"
            ))
        );
    }
}

#[test]
fn invalid_annealing_config_is_rejected() {
    let config = SolverConfig::default()
        .with_annealing(AnnealingConfig::default().with_cooling_rate(1.5));
    assert!(Solver::from_config(&config).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn success_always_means_a_valid_tour(
        (n, row, col) in (1usize..=6).prop_flat_map(|n| (Just(n), 0..n, 0..n))
    ) {
        let mut solver = SolverBuilder::new()
            .with_step_limit(50_000)
            .add_strategy(GreedyTraversal::new())
            .add_strategy(WarnsdorffBacktracking::new())
            .build();
        let comparison = solver.solve(n, Position::new(row, col)).unwrap();
        let board = Board::new(n).unwrap();
        for result in comparison.results() {
            prop_assert_eq!(result.success(), is_valid_tour(&board, result.path().steps()));
            prop_assert_eq!(result.path().first(), Some(Position::new(row, col)));
        }
    }
}
