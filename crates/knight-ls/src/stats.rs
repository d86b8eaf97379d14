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

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnealingStatistics {
    /// Neighbours proposed.
    pub iterations: u64,
    /// Neighbours accepted, improving or not.
    pub accepted: u64,
    /// Accepted neighbours that scored worse than the current walk.
    pub accepted_worse: u64,
    /// Times the best walk was replaced.
    pub best_updates: u64,
    /// Outer iterations completed.
    pub temperature_steps: u64,
    pub final_temperature: f64,
    /// Score of the best walk.
    pub best_score: i64,
    pub time_total: Duration,
}

impl AnnealingStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    #[inline]
    pub fn on_accepted(&mut self, worse: bool) {
        self.accepted = self.accepted.saturating_add(1);
        if worse {
            self.accepted_worse = self.accepted_worse.saturating_add(1);
        }
    }

    #[inline]
    pub fn on_best_update(&mut self, score: i64) {
        self.best_updates = self.best_updates.saturating_add(1);
        self.best_score = score;
    }

    #[inline]
    pub fn on_temperature_step(&mut self, temperature: f64) {
        self.temperature_steps = self.temperature_steps.saturating_add(1);
        self.final_temperature = temperature;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.iterations.saturating_sub(self.accepted)
    }
}

impl std::fmt::Display for AnnealingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Annealing Statistics:")?;
        writeln!(f, "  Iterations:           {}", self.iterations)?;
        writeln!(f, "  Accepted:             {}", self.accepted)?;
        writeln!(f, "  Accepted worse:       {}", self.accepted_worse)?;
        writeln!(f, "  Rejected:             {}", self.rejected())?;
        writeln!(f, "  Best updates:         {}", self.best_updates)?;
        writeln!(f, "  Best score:           {}", self.best_score)?;
        writeln!(f, "  Temperature steps:    {}", self.temperature_steps)?;
        writeln!(f, "  Final temperature:    {:.4}", self.final_temperature)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_derived() {
        let mut stats = AnnealingStatistics::default();
        for _ in 0..5 {
            stats.on_iteration();
        }
        stats.on_accepted(false);
        stats.on_accepted(true);
        assert_eq!(stats.rejected(), 3);
        assert_eq!(stats.accepted_worse, 1);
        assert!(stats.to_string().contains("Rejected:             3"));
    }
}
