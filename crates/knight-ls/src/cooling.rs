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

//! Temperature schedules.
//!
//! A schedule starts at its initial temperature, is updated once per outer
//! iteration of the annealing loop, and is frozen once the temperature drops
//! to its minimum. The annealing loop ends at the frozen state.

use crate::config::AnnealingConfig;

pub trait CoolingSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature to its initial value.
    fn on_start(&mut self);

    /// Moves to the temperature of the next outer iteration.
    fn update(&mut self);

    /// Returns the current temperature.
    fn current(&self) -> f64;

    /// Returns `true` once the temperature is at or below the minimum.
    fn is_frozen(&self) -> bool;
}

/// `T(k+1) = T(k) * alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    initial: f64,
    current: f64,
    alpha: f64,
    min_temp: f64,
}

impl GeometricCooling {
    /// # Panics
    ///
    /// Panics if `alpha` is not strictly between `0.0` and `1.0`, or if
    /// `min_temp` is negative or not finite.
    #[inline]
    pub fn new(initial: f64, alpha: f64, min_temp: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "called `GeometricCooling::new()` with invalid alpha: {}. Must be in (0.0, 1.0)",
            alpha
        );
        assert!(
            min_temp.is_finite() && min_temp >= 0.0,
            "called `GeometricCooling::new()` with invalid min_temp: {}. Must be finite and >= 0.0",
            min_temp
        );
        Self {
            initial,
            current: initial,
            alpha,
            min_temp,
        }
    }

    /// Builds the schedule from a validated config.
    #[inline]
    pub fn from_config(config: &AnnealingConfig) -> Self {
        Self::new(
            config.initial_temperature,
            config.cooling_rate,
            config.min_temperature,
        )
    }
}

impl Default for GeometricCooling {
    fn default() -> Self {
        Self::from_config(&AnnealingConfig::default())
    }
}

impl CoolingSchedule for GeometricCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current *= self.alpha;
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.min_temp
    }
}

/// `T(k+1) = max(0, T(k) - delta)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCooling {
    initial: f64,
    current: f64,
    decrement: f64,
    min_temp: f64,
}

impl LinearCooling {
    /// # Panics
    ///
    /// Panics if `decrement` is not positive, or if `min_temp` is negative
    /// or not finite.
    #[inline]
    pub fn new(initial: f64, decrement: f64, min_temp: f64) -> Self {
        assert!(
            decrement > 0.0,
            "called `LinearCooling::new()` with non-positive decrement: {}",
            decrement
        );
        assert!(
            min_temp.is_finite() && min_temp >= 0.0,
            "called `LinearCooling::new()` with invalid min_temp: {}. Must be finite and >= 0.0",
            min_temp
        );
        Self {
            initial,
            current: initial,
            decrement,
            min_temp,
        }
    }

    /// Cools from the config's initial to its minimum temperature in
    /// `steps` outer iterations.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is zero.
    pub fn over_steps(config: &AnnealingConfig, steps: u32) -> Self {
        assert!(steps > 0, "called `LinearCooling::over_steps()` with zero steps");
        let span = config.initial_temperature - config.min_temperature;
        Self::new(
            config.initial_temperature,
            span / f64::from(steps),
            config.min_temperature,
        )
    }
}

impl CoolingSchedule for LinearCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current = (self.current - self.decrement).max(0.0);
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    /// Also frozen at zero, where `update` stops changing the temperature.
    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.min_temp || self.current <= 0.0
    }
}
