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

//! `TourStrategy` implementation for simulated annealing.

use crate::{
    config::{AnnealingConfig, ConfigError},
    cooling::{CoolingSchedule, GeometricCooling},
    engine::AnnealingEngine,
    eval::KnightMoveFitness,
};
use knight_search::{
    result::StrategyOutcome,
    strategy::{StrategyContext, TourStrategy},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const ANNEALING_NAME: &str = "Simulated Annealing";
pub const ANNEALING_COLOR: &str = "#81C784";

/// Simulated annealing with the pivot neighbour and `KnightMoveFitness`.
///
/// Each run draws a fresh `ChaCha8Rng`: from the configured seed if there is
/// one, so that every run repeats the same search, and from the thread-local
/// generator otherwise.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingStrategy<C = GeometricCooling> {
    engine: AnnealingEngine,
    schedule: C,
    evaluator: KnightMoveFitness,
    seed: Option<u64>,
}

impl Default for SimulatedAnnealingStrategy {
    fn default() -> Self {
        Self {
            engine: AnnealingEngine::default(),
            schedule: GeometricCooling::default(),
            evaluator: KnightMoveFitness::new(),
            seed: None,
        }
    }
}

impl SimulatedAnnealingStrategy {
    /// Creates a strategy with geometric cooling as configured.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` does not validate.
    pub fn new(config: AnnealingConfig) -> Result<Self, ConfigError> {
        let engine = AnnealingEngine::new(config)?;
        Ok(Self {
            engine,
            schedule: GeometricCooling::from_config(&config),
            evaluator: KnightMoveFitness::new(),
            seed: None,
        })
    }
}

impl<C> SimulatedAnnealingStrategy<C>
where
    C: CoolingSchedule,
{
    /// Seeds every run with `seed`.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the cooling schedule. Only the schedule decides when the
    /// run is frozen; the config's temperatures no longer apply.
    #[inline]
    pub fn with_cooling_schedule<D>(self, schedule: D) -> SimulatedAnnealingStrategy<D>
    where
        D: CoolingSchedule,
    {
        SimulatedAnnealingStrategy {
            engine: self.engine,
            schedule,
            evaluator: self.evaluator,
            seed: self.seed,
        }
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn config(&self) -> &AnnealingConfig {
        self.engine.config()
    }

    fn make_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl<C> TourStrategy for SimulatedAnnealingStrategy<C>
where
    C: CoolingSchedule,
{
    fn name(&self) -> &str {
        ANNEALING_NAME
    }

    fn color(&self) -> &str {
        ANNEALING_COLOR
    }

    fn solve(&mut self, context: StrategyContext<'_>) -> StrategyOutcome {
        let mut rng = self.make_rng();
        self.engine
            .run(
                &context.board,
                context.start,
                &mut self.schedule,
                &self.evaluator,
                &mut rng,
                context.monitor,
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooling::LinearCooling;
    use knight_model::{board::Board, position::Position};
    use knight_search::{
        monitor::{interrupt::InterruptMonitor, no_op::NoOperationMonitor},
        report::run_strategy,
        result::TerminationReason,
    };
    use std::sync::atomic::AtomicBool;

    fn quick() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_cooling_rate(0.8)
            .with_iterations_per_temperature(20)
    }

    #[test]
    fn test_name_and_color() {
        let strategy = SimulatedAnnealingStrategy::default();
        assert_eq!(strategy.name(), "Simulated Annealing");
        assert_eq!(strategy.color(), "#81C784");
        assert_eq!(strategy.config(), &AnnealingConfig::default());
        assert_eq!(strategy.seed(), None);
    }

    #[test]
    fn test_new_validates_config() {
        let err = SimulatedAnnealingStrategy::new(quick().with_cooling_rate(1.2)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCoolingRate(1.2));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let board = Board::new(6).unwrap();
        let mut strategy = SimulatedAnnealingStrategy::new(quick()).unwrap().with_seed(17);
        let mut monitor = NoOperationMonitor::new();
        let a = run_strategy(&mut strategy, &board, Position::new(0, 0), &mut monitor).unwrap();
        let b = run_strategy(&mut strategy, &board, Position::new(0, 0), &mut monitor).unwrap();
        assert_eq!(a.path(), b.path());
        assert_eq!(a.success(), b.success());
    }

    #[test]
    fn test_success_agrees_with_reason_for_two_seeds() {
        let board = Board::new(5).unwrap();
        for seed in [7, 8] {
            let mut strategy = SimulatedAnnealingStrategy::new(quick()).unwrap().with_seed(seed);
            let result = run_strategy(
                &mut strategy,
                &board,
                Position::new(0, 0),
                &mut NoOperationMonitor::new(),
            )
            .unwrap();
            assert_eq!(
                result.success(),
                result.reason() == &TerminationReason::TourFound
            );
        }
    }

    #[test]
    fn test_linear_schedule_is_used() {
        let board = Board::new(3).unwrap();
        let config = quick();
        let mut strategy = SimulatedAnnealingStrategy::new(config)
            .unwrap()
            .with_seed(1)
            .with_cooling_schedule(LinearCooling::over_steps(&config, 2));
        let result = run_strategy(
            &mut strategy,
            &board,
            Position::new(0, 0),
            &mut NoOperationMonitor::new(),
        )
        .unwrap();
        assert!(!result.success());
        assert_eq!(result.reason(), &TerminationReason::CoolingFinished);
    }

    #[test]
    fn test_interrupt_aborts() {
        let board = Board::new(8).unwrap();
        let stop = AtomicBool::new(true);
        let mut monitor = InterruptMonitor::new(&stop);
        let mut strategy = SimulatedAnnealingStrategy::default().with_seed(5);
        let result = run_strategy(&mut strategy, &board, Position::new(0, 0), &mut monitor).unwrap();
        assert!(!result.success());
        assert!(result.reason().is_aborted());
    }
}
