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

//! Portfolio configuration.
//!
//! `SolverConfig` deserializes from partial JSON (or any serde format);
//! missing fields take their defaults. Limits are given in milliseconds:
//!
//! ```json
//! { "time_limit_ms": 5000, "seed": 42, "annealing": { "cooling_rate": 0.95 } }
//! ```
//!
//! The default config bounds every run by [`DEFAULT_TIME_LIMIT`] and the
//! frontier search by [`DEFAULT_FRONTIER_EXPANSION_LIMIT`]. An explicit
//! `null` removes a limit.

use crate::error::SolverError;
use knight_bt::strategy::{DivideAndConquer, ExhaustiveBacktracking, WarnsdorffBacktracking};
use knight_heuristic::{frontier::FrontierSearch, greedy::GreedyTraversal};
use knight_ls::{config::AnnealingConfig, strategy::SimulatedAnnealingStrategy};
use knight_search::strategy::TourStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock limit per strategy in the default config.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Frontier expansions allowed in the default config. Every frontier entry
/// owns a full path, so this also bounds memory.
pub const DEFAULT_FRONTIER_EXPANSION_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Per-strategy wall-clock limit.
    #[serde(rename = "time_limit_ms", with = "optional_millis")]
    pub time_limit: Option<Duration>,
    /// Seed for simulated annealing. Unseeded runs are not reproducible.
    pub seed: Option<u64>,
    pub annealing: AnnealingConfig,
    /// Bound on frontier search expansions.
    pub frontier_expansion_limit: Option<u64>,
}

impl Default for SolverConfig {
    #[inline]
    fn default() -> Self {
        Self {
            time_limit: Some(DEFAULT_TIME_LIMIT),
            seed: None,
            annealing: AnnealingConfig::default(),
            frontier_expansion_limit: Some(DEFAULT_FRONTIER_EXPANSION_LIMIT),
        }
    }
}

impl SolverConfig {
    /// A config with no time limit and no frontier expansion limit.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            time_limit: None,
            frontier_expansion_limit: None,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    #[inline]
    pub fn with_frontier_expansion_limit(mut self, limit: u64) -> Self {
        self.frontier_expansion_limit = Some(limit);
        self
    }

    /// Builds the six strategies in their display order.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Config` if the annealing parameters are invalid.
    pub fn portfolio(&self) -> Result<Vec<Box<dyn TourStrategy>>, SolverError> {
        let mut annealing = SimulatedAnnealingStrategy::new(self.annealing)?;
        if let Some(seed) = self.seed {
            annealing = annealing.with_seed(seed);
        }
        let frontier = match self.frontier_expansion_limit {
            Some(limit) => FrontierSearch::with_expansion_limit(limit),
            None => FrontierSearch::new(),
        };

        let strategies: Vec<Box<dyn TourStrategy>> = vec![
            Box::new(ExhaustiveBacktracking::new()),
            Box::new(DivideAndConquer::new()),
            Box::new(annealing),
            Box::new(GreedyTraversal::new()),
            Box::new(WarnsdorffBacktracking::new()),
            Box::new(frontier),
        ];
        Ok(strategies)
    }
}

mod optional_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => serializer.serialize_some(&(duration.as_millis() as u64)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portfolio_order() {
        let names: Vec<String> = SolverConfig::default()
            .portfolio()
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "Brute Force",
                "Divide and Conquer",
                "Simulated Annealing",
                "Warnsdorff",
                "Warnsdorff DFS",
                "A* Search"
            ]
        );
    }

    #[test]
    fn test_invalid_annealing_is_rejected() {
        let config = SolverConfig::default()
            .with_annealing(AnnealingConfig::default().with_iterations_per_temperature(0));
        assert!(matches!(config.portfolio(), Err(SolverError::Config(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SolverConfig::default()
            .with_time_limit(Duration::from_millis(1500))
            .with_seed(42)
            .with_frontier_expansion_limit(1000);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"time_limit_ms\":1500"));
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SolverConfig =
            serde_json::from_str(r#"{ "seed": 7, "annealing": { "cooling_rate": 0.9 } }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_limit, Some(DEFAULT_TIME_LIMIT));
        assert_eq!(
            config.frontier_expansion_limit,
            Some(DEFAULT_FRONTIER_EXPANSION_LIMIT)
        );
        assert_eq!(config.annealing.cooling_rate, 0.9);
        assert_eq!(config.annealing.iterations_per_temperature, 100);
    }

    #[test]
    fn test_default_config_is_bounded() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit, Some(DEFAULT_TIME_LIMIT));
        assert_eq!(
            config.frontier_expansion_limit,
            Some(DEFAULT_FRONTIER_EXPANSION_LIMIT)
        );

        let unbounded = SolverConfig::unbounded();
        assert_eq!(unbounded.time_limit, None);
        assert_eq!(unbounded.frontier_expansion_limit, None);
        assert_eq!(unbounded.annealing, config.annealing);
    }

    #[test]
    fn test_null_in_json_removes_a_limit() {
        let config: SolverConfig =
            serde_json::from_str(r#"{ "time_limit_ms": null, "frontier_expansion_limit": null }"#)
                .unwrap();
        assert_eq!(config, SolverConfig::unbounded());
    }
}
