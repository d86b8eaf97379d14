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

//! The annealing loop.
//!
//! The loop keeps a current walk and the best walk seen. Each outer
//! iteration runs `iterations_per_temperature` proposals at a fixed
//! temperature, then cools the schedule. A proposal is a pivot neighbour of
//! the current walk; it replaces the current walk if it scores at least as
//! well, and otherwise with probability `exp(delta / temperature)`.
//!
//! The run ends when the schedule is frozen, when a monitor terminates it,
//! or, with `stop_on_complete_tour`, as soon as the best walk covers the
//! board.

use crate::{
    config::{AnnealingConfig, ConfigError},
    construct::random_walk,
    cooling::CoolingSchedule,
    eval::TourEvaluator,
    neighborhood::pivot_neighbor,
    result::AnnealingOutcome,
    stats::AnnealingStatistics,
};
use knight_model::{
    board::Board,
    position::Position,
    tour::Tour,
    validation::is_valid_tour,
};
use knight_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::TerminationReason,
};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingEngine {
    config: AnnealingConfig,
}

impl Default for AnnealingEngine {
    fn default() -> Self {
        Self {
            config: AnnealingConfig::default(),
        }
    }
}

impl AnnealingEngine {
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` does not validate.
    pub fn new(config: AnnealingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Anneals from a random walk starting at `start`.
    ///
    /// The schedule is reset before the first proposal.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    pub fn run<C, E, R, S>(
        &self,
        board: &Board,
        start: Position,
        schedule: &mut C,
        evaluator: &E,
        rng: &mut R,
        monitor: &mut S,
    ) -> AnnealingOutcome
    where
        C: CoolingSchedule + ?Sized,
        E: TourEvaluator + ?Sized,
        R: Rng + ?Sized,
        S: SearchMonitor + ?Sized,
    {
        debug_assert!(
            board.contains(start),
            "called `AnnealingEngine::run` with start {} outside {}",
            start,
            board
        );

        let started = std::time::Instant::now();
        let mut stats = AnnealingStatistics::default();
        monitor.on_enter_search(board, start);
        schedule.on_start();

        let mut current: Vec<Position> = random_walk(board, start, rng).tour().positions().collect();
        let mut current_score = evaluator.score(board, &current);
        let mut best = current.clone();
        stats.best_score = current_score;
        log::debug!(
            "annealing on {} from {}: initial walk of {} cells, score {}",
            board,
            start,
            current.len(),
            current_score
        );

        let reason = 'outer: loop {
            if self.config.stop_on_complete_tour && covers(board, &best) {
                break TerminationReason::TourFound;
            }
            if schedule.is_frozen() {
                break TerminationReason::CoolingFinished;
            }

            let temperature = schedule.current();
            for _ in 0..self.config.iterations_per_temperature {
                monitor.on_step();
                if let SearchCommand::Terminate(msg) = monitor.search_command() {
                    break 'outer TerminationReason::Aborted(msg);
                }
                stats.on_iteration();

                // `current` always holds at least the start cell.
                let Some(neighbor) = pivot_neighbor(board, &current, rng) else {
                    continue;
                };
                let candidate: Vec<Position> = neighbor.tour().positions().collect();
                let score = evaluator.score(board, &candidate);
                let delta = score - current_score;
                if !accept(delta, temperature, rng) {
                    continue;
                }

                stats.on_accepted(delta < 0);
                current = candidate;
                current_score = score;
                if current_score > stats.best_score {
                    best.clone_from(&current);
                    stats.on_best_update(current_score);
                    if self.config.stop_on_complete_tour && covers(board, &best) {
                        break 'outer TerminationReason::TourFound;
                    }
                }
            }

            schedule.update();
            stats.on_temperature_step(schedule.current());
            log::debug!(
                "temperature {:.4} -> {:.4}: current {} cells (score {}), best score {}",
                temperature,
                schedule.current(),
                current.len(),
                current_score,
                stats.best_score
            );
        };

        let tour = Tour::from_positions(best);
        let reason = match reason {
            TerminationReason::CoolingFinished if is_valid_tour(board, tour.steps()) => {
                TerminationReason::TourFound
            }
            other => other,
        };
        if reason == TerminationReason::TourFound {
            monitor.on_tour_found(&tour);
        }

        stats.set_total_time(started.elapsed());
        monitor.on_exit_search();
        log::debug!(
            "annealing finished: {} after {} iterations ({} accepted)",
            reason,
            stats.iterations,
            stats.accepted
        );

        AnnealingOutcome::new(tour, reason, stats)
    }
}

/// Metropolis acceptance for a score change of `delta` (higher is better).
#[inline]
fn accept<R>(delta: i64, temperature: f64, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    if delta >= 0 {
        return true;
    }
    let probability = (delta as f64 / temperature).exp();
    rng.random::<f64>() < probability
}

#[inline]
fn covers(board: &Board, walk: &[Position]) -> bool {
    walk.len() == board.num_cells()
        && is_valid_tour(board, Tour::from_positions(walk.iter().copied()).steps())
}
