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

//! # Portfolio Solver
//!
//! Runs every configured strategy on the same board and start, each on its
//! own thread via `std::thread::scope`, and collects the results into a
//! [`Comparison`].
//!
//! Every thread gets its own `CompositeMonitor` holding
//! - an `InterruptMonitor` on the solver's shared stop flag, so
//!   [`Solver::interrupt_handle`] stops all running strategies at once;
//! - a `TimeLimitMonitor` if a time limit is set;
//! - a `StepLimitMonitor` if a step limit is set.
//!
//! Strategies do not stop each other: every strategy runs to its own end so
//! that the comparison is complete.

use crate::{comparison::Comparison, config::SolverConfig, error::SolverError};
use knight_model::{board::Board, position::Position};
use knight_search::{
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, step_limit::StepLimitMonitor,
        time_limit::TimeLimitMonitor,
    },
    report::{run_strategy, AlgorithmResult},
    stats::{SolverStatistics, SolverStatisticsBuilder},
    strategy::TourStrategy,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

pub struct Solver<'a> {
    strategies: Vec<Box<dyn TourStrategy + 'a>>,
    stop_signal: Arc<AtomicBool>,
    time_limit: Option<Duration>,
    step_limit: Option<u64>,
}

impl std::fmt::Debug for Solver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("strategies", &self.strategy_names())
            .field("time_limit", &self.time_limit)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}

impl Solver<'static> {
    /// Builds a solver running the default six-strategy portfolio.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Config` if the annealing parameters are invalid.
    pub fn from_config(config: &SolverConfig) -> Result<Self, SolverError> {
        let mut builder = SolverBuilder::new();
        if let Some(limit) = config.time_limit {
            builder = builder.with_time_limit(limit);
        }
        for strategy in config.portfolio()? {
            builder = builder.add_strategy_boxed(strategy);
        }
        Ok(builder.build())
    }
}

impl<'a> Solver<'a> {
    #[inline]
    pub fn add_strategy<S>(&mut self, strategy: S)
    where
        S: TourStrategy + 'a,
    {
        self.strategies.push(Box::new(strategy));
    }

    #[inline]
    pub fn add_strategy_boxed(&mut self, strategy: Box<dyn TourStrategy + 'a>) {
        self.strategies.push(strategy);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// A handle to the shared stop flag. Storing `true` aborts every
    /// running strategy; the flag is cleared when the next solve starts.
    #[inline]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_signal)
    }

    /// Runs the portfolio on an `board_size` board from `start`.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NoStrategies` for an empty portfolio,
    /// `SolverError::Input` for an invalid size or start, and
    /// `SolverError::StrategyPanicked` if a strategy thread panics.
    pub fn solve(&mut self, board_size: usize, start: Position) -> Result<Comparison, SolverError> {
        let board = Board::new(board_size)?;
        self.solve_on(&board, start)
    }

    /// Like [`Solver::solve`], on an existing board.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve`].
    pub fn solve_on(&mut self, board: &Board, start: Position) -> Result<Comparison, SolverError> {
        if self.strategies.is_empty() {
            return Err(SolverError::NoStrategies);
        }
        board.check_start(start)?;

        let start_time = std::time::Instant::now();
        self.stop_signal.store(false, Ordering::Relaxed);

        log::info!(
            "solving {} from {} with {} strategies",
            board,
            start,
            self.strategies.len()
        );

        let results = self.run_portfolio_parallel(board, start)?;
        let statistics = build_statistics(start_time, &results);

        log::info!(
            "portfolio finished: {} of {} strategies found a tour in {:.3} s",
            statistics.tours_found,
            statistics.strategies_run,
            statistics.solve_duration.as_secs_f64()
        );

        Ok(Comparison::new(*board, start, results, statistics))
    }

    fn run_portfolio_parallel(
        &mut self,
        board: &Board,
        start: Position,
    ) -> Result<Vec<AlgorithmResult>, SolverError> {
        let time_limit = self.time_limit;
        let step_limit = self.step_limit;
        let stop_signal: &AtomicBool = &self.stop_signal;

        std::thread::scope(|scope| -> Result<Vec<AlgorithmResult>, SolverError> {
            let mut handles = Vec::with_capacity(self.strategies.len());

            for strategy in &mut self.strategies {
                let name = strategy.name().to_string();
                let handle = scope.spawn(move || {
                    let mut monitor = CompositeMonitor::with_capacity(3);
                    monitor.add_monitor(InterruptMonitor::new(stop_signal));
                    if let Some(limit) = time_limit {
                        monitor.add_monitor(TimeLimitMonitor::new(limit));
                    }
                    if let Some(limit) = step_limit {
                        monitor.add_monitor(StepLimitMonitor::new(limit));
                    }

                    log::info!("starting {}", strategy.name());
                    let result = run_strategy(strategy.as_mut(), board, start, &mut monitor);
                    if let Ok(result) = &result {
                        log::info!("{}", result);
                    }
                    result
                });
                handles.push((name, handle));
            }

            let mut results = Vec::with_capacity(handles.len());
            for (name, handle) in handles {
                let result = handle
                    .join()
                    .map_err(|_| SolverError::StrategyPanicked(name))??;
                results.push(result);
            }
            Ok(results)
        })
    }
}

fn build_statistics(start_time: std::time::Instant, results: &[AlgorithmResult]) -> SolverStatistics {
    SolverStatisticsBuilder::new()
        .strategies_run(results.len())
        .tours_found(results.iter().filter(|r| r.success()).count())
        .aborted(results.iter().filter(|r| r.reason().is_aborted()).count())
        .used_threads(results.len())
        .solve_duration(start_time.elapsed())
        .build()
}

pub struct SolverBuilder<'a> {
    strategies: Vec<Box<dyn TourStrategy + 'a>>,
    time_limit: Option<Duration>,
    step_limit: Option<u64>,
}

impl Default for SolverBuilder<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SolverBuilder<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            time_limit: None,
            step_limit: None,
        }
    }

    /// Limits every strategy to `limit` of wall-clock time.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Limits every strategy to `limit` search steps.
    #[inline]
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    #[inline]
    pub fn add_strategy<S>(mut self, strategy: S) -> Self
    where
        S: TourStrategy + 'a,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    #[inline]
    pub fn add_strategy_boxed(mut self, strategy: Box<dyn TourStrategy + 'a>) -> Self {
        self.strategies.push(strategy);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a> {
        Solver {
            strategies: self.strategies,
            stop_signal: Arc::new(AtomicBool::new(false)),
            time_limit: self.time_limit,
            step_limit: self.step_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_bt::strategy::WarnsdorffBacktracking;
    use knight_heuristic::greedy::GreedyTraversal;
    use knight_model::error::BoardError;
    use knight_search::report::InputError;

    #[test]
    fn test_empty_portfolio_is_an_error() {
        let mut solver = SolverBuilder::new().build();
        assert_eq!(
            solver.solve(5, Position::new(0, 0)),
            Err(SolverError::NoStrategies)
        );
    }

    #[test]
    fn test_input_errors() {
        let mut solver = SolverBuilder::new()
            .add_strategy(GreedyTraversal::new())
            .build();
        assert_eq!(
            solver.solve(0, Position::new(0, 0)),
            Err(SolverError::Input(InputError::Board(BoardError::InvalidSize(0))))
        );
        assert!(matches!(
            solver.solve(5, Position::new(5, 0)),
            Err(SolverError::Input(InputError::Board(
                BoardError::StartOutOfBounds { .. }
            )))
        ));
    }

    #[test]
    fn test_results_follow_portfolio_order() {
        let mut solver = SolverBuilder::new()
            .add_strategy(WarnsdorffBacktracking::new())
            .add_strategy(GreedyTraversal::new())
            .build();
        assert_eq!(solver.strategy_names(), ["Warnsdorff DFS", "Warnsdorff"]);

        let comparison = solver.solve(5, Position::new(2, 2)).unwrap();
        let names: Vec<&str> = comparison.results().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Warnsdorff DFS", "Warnsdorff"]);
        assert_eq!(comparison.statistics().strategies_run, 2);
        assert_eq!(comparison.statistics().tours_found, 2);
        assert_eq!(comparison.statistics().used_threads, 2);
    }

    #[test]
    fn test_default_config_sets_a_time_limit() {
        let solver = Solver::from_config(&SolverConfig::default()).unwrap();
        assert_eq!(solver.len(), 6);
        assert_eq!(solver.time_limit(), Some(crate::config::DEFAULT_TIME_LIMIT));
        assert_eq!(solver.step_limit(), None);

        let unbounded = Solver::from_config(&SolverConfig::unbounded()).unwrap();
        assert_eq!(unbounded.time_limit(), None);
    }

    #[test]
    fn test_raised_interrupt_is_cleared_on_solve() {
        let mut solver = SolverBuilder::new()
            .add_strategy(GreedyTraversal::new())
            .build();
        solver.interrupt_handle().store(true, Ordering::Relaxed);
        let comparison = solver.solve(5, Position::new(0, 0)).unwrap();
        assert_eq!(comparison.statistics().aborted, 0);
    }
}
