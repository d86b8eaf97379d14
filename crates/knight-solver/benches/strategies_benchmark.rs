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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use knight_bt::strategy::{ExhaustiveBacktracking, WarnsdorffBacktracking};
use knight_heuristic::{frontier::FrontierSearch, greedy::GreedyTraversal};
use knight_ls::{config::AnnealingConfig, strategy::SimulatedAnnealingStrategy};
use knight_model::{board::Board, position::Position};
use knight_search::{
    monitor::step_limit::StepLimitMonitor, report::run_strategy, strategy::TourStrategy,
};
use std::hint::black_box;

const BOARD_SIZES: [usize; 3] = [5, 6, 8];

// Keeps the exhaustive search bounded on boards where it would not finish.
const STEP_LIMIT: u64 = 200_000;

fn strategies(seed: u64) -> Vec<Box<dyn TourStrategy>> {
    let annealing = AnnealingConfig::default()
        .with_cooling_rate(0.9)
        .with_iterations_per_temperature(50);
    let annealing = match SimulatedAnnealingStrategy::new(annealing) {
        Ok(strategy) => strategy.with_seed(seed),
        Err(err) => panic!("Benchmark configuration error: {err}"),
    };

    vec![
        Box::new(ExhaustiveBacktracking::new()),
        Box::new(WarnsdorffBacktracking::new()),
        Box::new(GreedyTraversal::with_seed(seed)),
        Box::new(FrontierSearch::with_expansion_limit(STEP_LIMIT)),
        Box::new(annealing),
    ]
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies_benchmark");
    group.sample_size(10);

    for size in BOARD_SIZES {
        let board = Board::new(size).unwrap();
        let start = Position::new(0, 0);
        group.throughput(Throughput::Elements(board.num_cells() as u64));

        for mut strategy in strategies(42) {
            let name = strategy.name().to_string();
            group.bench_with_input(
                BenchmarkId::new(name, format!("{size}x{size}")),
                &board,
                |b, board| {
                    b.iter(|| {
                        let mut monitor = StepLimitMonitor::new(STEP_LIMIT);
                        let result = run_strategy(
                            strategy.as_mut(),
                            black_box(board),
                            black_box(start),
                            &mut monitor,
                        )
                        .unwrap();
                        black_box(result.success())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
