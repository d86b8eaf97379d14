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

//! Behaviour every strategy shares, checked through the public entry point.

use knight_bt::strategy::{DivideAndConquer, ExhaustiveBacktracking, WarnsdorffBacktracking};
use knight_heuristic::{frontier::FrontierSearch, greedy::GreedyTraversal};
use knight_ls::{config::AnnealingConfig, strategy::SimulatedAnnealingStrategy};
use knight_model::{
    board::Board,
    error::BoardError,
    position::{is_knight_move, Position},
    validation::validate_tour,
};
use knight_search::{
    monitor::{
        interrupt::InterruptMonitor, no_op::NoOperationMonitor, step_limit::StepLimitMonitor,
    },
    report::{run_strategy, run_strategy_on_size, AlgorithmResult, InputError},
    result::TerminationReason,
    strategy::TourStrategy,
};
use std::sync::atomic::AtomicBool;

fn quick_annealing() -> SimulatedAnnealingStrategy {
    let config = AnnealingConfig::default()
        .with_cooling_rate(0.8)
        .with_iterations_per_temperature(20);
    SimulatedAnnealingStrategy::new(config).unwrap().with_seed(1)
}

fn all_strategies() -> Vec<Box<dyn TourStrategy>> {
    vec![
        Box::new(ExhaustiveBacktracking::new()),
        Box::new(DivideAndConquer::new()),
        Box::new(quick_annealing()),
        Box::new(GreedyTraversal::new()),
        Box::new(WarnsdorffBacktracking::new()),
        Box::new(FrontierSearch::new()),
    ]
}

fn run_limited(
    strategy: &mut dyn TourStrategy,
    n: usize,
    start: Position,
    steps: u64,
) -> AlgorithmResult {
    let board = Board::new(n).unwrap();
    run_strategy(strategy, &board, start, &mut StepLimitMonitor::new(steps)).unwrap()
}

fn assert_success_matches_validator(result: &AlgorithmResult, n: usize) {
    let board = Board::new(n).unwrap();
    let report = validate_tour(&board, result.path().steps());
    assert_eq!(result.success(), report.is_valid(), "{result}: {report}");
}

#[test]
fn exhaustive_successes_pass_the_validator() {
    let mut strategy = ExhaustiveBacktracking::new();
    for n in 3..=8 {
        let board = Board::new(n).unwrap();
        let limit = if n <= 4 { u64::MAX } else { 20_000 };
        for start in board.positions() {
            let result = run_limited(&mut strategy, n, start, limit);
            assert_success_matches_validator(&result, n);
            if n <= 4 {
                assert!(!result.success());
                assert_eq!(result.reason(), &TerminationReason::InfeasibilityProven);
            }
        }
    }
}

#[test]
fn exhaustive_finds_tours_from_every_corner() {
    let mut strategy = ExhaustiveBacktracking::new();
    for n in [5, 6] {
        let board = Board::new(n).unwrap();
        for start in [
            Position::new(0, 0),
            Position::new(0, n - 1),
            Position::new(n - 1, 0),
            Position::new(n - 1, n - 1),
        ] {
            let result =
                run_strategy(&mut strategy, &board, start, &mut NoOperationMonitor::new()).unwrap();
            assert!(result.success(), "n = {n}, start = {start}: {result}");
            assert_eq!(result.reason(), &TerminationReason::TourFound);
            assert_eq!(result.path().len(), n * n);
            assert_eq!(result.path().first(), Some(start));
            assert!(validate_tour(&board, result.path().steps()).issues().is_empty());
        }
    }
}

#[test]
fn exhaustive_finds_an_eight_by_eight_tour() {
    let board = Board::new(8).unwrap();
    let result = run_strategy(
        &mut ExhaustiveBacktracking::new(),
        &board,
        Position::new(0, 0),
        &mut NoOperationMonitor::new(),
    )
    .unwrap();
    assert!(result.success(), "{result}");
    assert_eq!(result.path().len(), 64);
    let report = validate_tour(&board, result.path().steps());
    assert!(report.issues().is_empty(), "{report}");
}

#[test]
fn divide_and_conquer_respects_board_size() {
    let mut strategy = DivideAndConquer::new();
    for n in [4, 8] {
        let result = run_limited(&mut strategy, n, Position::new(0, 0), 50_000);
        assert_success_matches_validator(&result, n);
        assert!(result.path().len() >= 1);
    }
    for n in [3, 5, 6, 7, 9, 12] {
        let result = run_limited(&mut strategy, n, Position::new(0, 0), 50_000);
        assert!(!result.success());
        assert_eq!(result.path().len(), 1);
        assert!(matches!(
            result.reason(),
            TerminationReason::PreconditionViolated(_)
        ));
    }
}

#[test]
fn divide_and_conquer_on_four_by_four_searches() {
    let result = run_limited(&mut DivideAndConquer::new(), 4, Position::new(0, 0), u64::MAX);
    assert!(!result.success());
    assert!(result.path().len() > 1);
    assert_eq!(result.reason(), &TerminationReason::InfeasibilityProven);
}

#[test]
fn warnsdorff_dfs_succeeds_at_least_as_often_as_greedy() {
    let cases = [
        (5, Position::new(0, 0)),
        (5, Position::new(0, 2)),
        (5, Position::new(2, 0)),
        (5, Position::new(2, 2)),
        (8, Position::new(0, 0)),
    ];
    for (n, start) in cases {
        let dfs = run_limited(&mut WarnsdorffBacktracking::new(), n, start, 1_000_000);
        let greedy_successes = (0..10u64)
            .filter(|&seed| {
                run_limited(&mut GreedyTraversal::with_seed(seed), n, start, u64::MAX).success()
            })
            .count();
        let dfs_successes = if dfs.success() { 10 } else { 0 };
        assert!(
            dfs_successes >= greedy_successes,
            "n = {n}, start = {start}: {dfs_successes} < {greedy_successes}"
        );
        assert!(dfs.success(), "n = {n}, start = {start}");
    }
}

#[test]
fn backtracking_paths_repeat_exactly() {
    let board = Board::new(5).unwrap();
    let mut exhaustive = ExhaustiveBacktracking::new();
    let mut monitor = NoOperationMonitor::new();
    let first = run_strategy(&mut exhaustive, &board, Position::new(0, 0), &mut monitor).unwrap();
    let second = run_strategy(&mut exhaustive, &board, Position::new(0, 0), &mut monitor).unwrap();
    assert_eq!(first.path(), second.path());

    let board = Board::new(4).unwrap();
    let mut grid = DivideAndConquer::new();
    let first = run_strategy(&mut grid, &board, Position::new(1, 1), &mut monitor).unwrap();
    let second = run_strategy(&mut grid, &board, Position::new(1, 1), &mut monitor).unwrap();
    assert_eq!(first.path(), second.path());
}

#[test]
fn annealing_is_reproducible_and_honest() {
    let board = Board::new(5).unwrap();
    let mut monitor = NoOperationMonitor::new();

    let first = run_strategy(&mut quick_annealing(), &board, Position::new(0, 0), &mut monitor).unwrap();
    let second = run_strategy(&mut quick_annealing(), &board, Position::new(0, 0), &mut monitor).unwrap();
    assert_eq!(first.path(), second.path());

    for seed in [11, 12] {
        let mut strategy = quick_annealing().with_seed(seed);
        let result = run_strategy(&mut strategy, &board, Position::new(0, 0), &mut monitor).unwrap();
        assert_success_matches_validator(&result, 5);
    }
}

#[test]
fn warnsdorff_dfs_five_by_five_from_center() {
    let board = Board::new(5).unwrap();
    let result = run_strategy(
        &mut WarnsdorffBacktracking::new(),
        &board,
        Position::new(2, 2),
        &mut NoOperationMonitor::new(),
    )
    .unwrap();

    assert!(result.success());
    assert_eq!(result.path().len(), 25);
    let first = result.path().steps()[0];
    assert_eq!((first.row(), first.col(), first.step_number()), (2, 2, 1));
    for pair in result.path().steps().windows(2) {
        assert!(is_knight_move(&pair[0].position(), &pair[1].position()));
    }
}

#[test]
fn no_strategy_succeeds_on_three_by_three() {
    let board = Board::new(3).unwrap();
    for mut strategy in all_strategies() {
        let result = run_strategy(
            strategy.as_mut(),
            &board,
            Position::new(0, 0),
            &mut NoOperationMonitor::new(),
        )
        .unwrap();
        assert!(!result.success(), "{}", result.name());
        assert!(result.path().len() >= 1);
    }
}

#[test]
fn every_strategy_honours_step_limit_and_interrupt() {
    let board = Board::new(8).unwrap();
    for mut strategy in all_strategies() {
        let result = run_limited(strategy.as_mut(), 8, Position::new(0, 0), 5);
        assert!(!result.success(), "{}", result.name());
        assert!(result.reason().is_aborted(), "{}", result.name());

        let stop = AtomicBool::new(true);
        let result = run_strategy(
            strategy.as_mut(),
            &board,
            Position::new(0, 0),
            &mut InterruptMonitor::new(&stop),
        )
        .unwrap();
        assert_eq!(
            result.reason(),
            &TerminationReason::Aborted("Interrupt signal received".to_string()),
            "{}",
            result.name()
        );
    }
}

#[test]
fn malformed_inputs_are_errors() {
    let mut strategy = GreedyTraversal::new();
    let mut monitor = NoOperationMonitor::new();

    assert_eq!(
        run_strategy_on_size(&mut strategy, 0, Position::new(0, 0), &mut monitor),
        Err(InputError::Board(BoardError::InvalidSize(0)))
    );
    assert_eq!(
        run_strategy_on_size(&mut strategy, 5, Position::new(2, 7), &mut monitor),
        Err(InputError::Board(BoardError::StartOutOfBounds {
            position: Position::new(2, 7),
            size: 5
        }))
    );
}
