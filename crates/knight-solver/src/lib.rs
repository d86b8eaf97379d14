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

//! Knight-Solver: strategy portfolio and comparison
//!
//! Runs a set of `TourStrategy` implementations on the same board and start,
//! each on its own scoped thread, and collects their `AlgorithmResult`s into
//! a `comparison::Comparison`.
//!
//! ```no_run
//! use knight_model::position::Position;
//! use knight_solver::{config::SolverConfig, solver::Solver};
//! use std::time::Duration;
//!
//! let config = SolverConfig::default()
//!     .with_time_limit(Duration::from_secs(5))
//!     .with_frontier_expansion_limit(50_000);
//! let mut solver = Solver::from_config(&config).unwrap();
//! let comparison = solver.solve(8, Position::new(0, 0)).unwrap();
//! println!("{comparison}");
//! ```

pub mod comparison;
pub mod config;
pub mod error;
pub mod solver;
