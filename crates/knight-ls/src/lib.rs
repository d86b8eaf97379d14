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

//! Knight-LS: simulated annealing for the knight's tour
//!
//! The search starts from a random walk and repeatedly proposes a neighbour
//! that keeps a random prefix of the current walk and regrows the rest with
//! fresh random moves. Neighbours are scored by a `TourEvaluator` and
//! accepted with the Metropolis rule under a cooling temperature.
//!
//! The run is stochastic. Seed the strategy for reproducible results.
//!
//! Module map
//! - `config`: `AnnealingConfig` and its validation.
//! - `cooling`: temperature schedules.
//! - `construct`: random-walk construction.
//! - `neighborhood`: the pivot neighbour move.
//! - `eval`: tour scoring.
//! - `engine`: the annealing loop.
//! - `result`, `stats`: outcome and counters.
//! - `strategy`: the `TourStrategy` implementation.

pub mod config;
pub mod construct;
pub mod cooling;
pub mod engine;
pub mod eval;
pub mod neighborhood;
pub mod result;
pub mod stats;
pub mod strategy;
