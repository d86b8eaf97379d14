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

//! Annealing parameters.
//!
//! `AnnealingConfig` deserializes from partial input: missing fields take
//! their defaults. Call `validate` before use; the strategy constructor does
//! this for you.

use serde::{Deserialize, Serialize};

/// Errors raised by invalid annealing parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cooling rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),
    #[error("{name} must be positive and finite, got {value}")]
    InvalidTemperature { name: &'static str, value: f64 },
    #[error("minimum temperature {min} is not below the initial temperature {initial}")]
    TemperatureOrder { min: f64, initial: f64 },
    #[error("iterations per temperature must be at least 1")]
    ZeroIterations,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    pub initial_temperature: f64,
    /// Factor applied to the temperature after each outer iteration.
    pub cooling_rate: f64,
    /// The run ends once the temperature drops to this value.
    pub min_temperature: f64,
    pub iterations_per_temperature: u32,
    /// End the run as soon as the best walk is a complete tour.
    pub stop_on_complete_tour: bool,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            cooling_rate: 0.99,
            min_temperature: 0.001,
            iterations_per_temperature: 100,
            stop_on_complete_tour: true,
        }
    }
}

impl AnnealingConfig {
    #[inline]
    pub fn with_initial_temperature(mut self, initial_temperature: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self
    }

    #[inline]
    pub fn with_cooling_rate(mut self, cooling_rate: f64) -> Self {
        self.cooling_rate = cooling_rate;
        self
    }

    #[inline]
    pub fn with_min_temperature(mut self, min_temperature: f64) -> Self {
        self.min_temperature = min_temperature;
        self
    }

    #[inline]
    pub fn with_iterations_per_temperature(mut self, iterations: u32) -> Self {
        self.iterations_per_temperature = iterations;
        self
    }

    #[inline]
    pub fn with_stop_on_complete_tour(mut self, stop: bool) -> Self {
        self.stop_on_complete_tour = stop;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::InvalidCoolingRate(self.cooling_rate));
        }
        check_temperature("initial temperature", self.initial_temperature)?;
        check_temperature("minimum temperature", self.min_temperature)?;
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// The number of outer iterations geometric cooling takes to reach the
    /// minimum temperature.
    pub fn temperature_steps(&self) -> u64 {
        let steps = (self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        if steps.is_finite() && steps > 0.0 {
            steps.ceil() as u64
        } else {
            0
        }
    }
}

fn check_temperature(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTemperature { name, value })
    }
}

impl std::fmt::Display for AnnealingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AnnealingConfig(t0: {}, rate: {}, t_min: {}, iterations: {}, stop_on_complete: {})",
            self.initial_temperature,
            self.cooling_rate,
            self.min_temperature,
            self.iterations_per_temperature,
            self.stop_on_complete_tour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnnealingConfig::default();
        assert_eq!(config.initial_temperature, 10.0);
        assert_eq!(config.cooling_rate, 0.99);
        assert_eq!(config.min_temperature, 0.001);
        assert_eq!(config.iterations_per_temperature, 100);
        assert!(config.stop_on_complete_tour);
        assert!(config.validate().is_ok());
        assert_eq!(config.temperature_steps(), 917);
    }

    #[test]
    fn test_rejects_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = AnnealingConfig::default().with_cooling_rate(rate);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidCoolingRate(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_temperatures_and_iterations() {
        let config = AnnealingConfig::default().with_initial_temperature(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTemperature {
                name: "initial temperature",
                value: 0.0
            })
        );

        let config = AnnealingConfig::default().with_min_temperature(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperature { .. })
        ));

        let config = AnnealingConfig::default().with_min_temperature(20.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TemperatureOrder { .. })
        ));

        let config = AnnealingConfig::default().with_iterations_per_temperature(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
        assert_eq!(
            ConfigError::ZeroIterations.to_string(),
            "iterations per temperature must be at least 1"
        );
    }

    #[test]
    fn test_deserializes_partial_json() {
        let config: AnnealingConfig =
            serde_json::from_str(r#"{ "cooling_rate": 0.95, "stop_on_complete_tour": false }"#)
                .unwrap();
        assert_eq!(config.cooling_rate, 0.95);
        assert!(!config.stop_on_complete_tour);
        assert_eq!(config.initial_temperature, 10.0);
        assert_eq!(config.iterations_per_temperature, 100);
    }
}
