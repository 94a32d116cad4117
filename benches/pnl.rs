//! Benchmark comparing the two cumulative PnL code paths.
//!
//! The scan path allocates and grows its output; the buffer path writes
//! into a preallocated slice. Same recurrence, same output, different cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crossover_backtest::backtest::{cumulative_pnl, cumulative_pnl_into};

fn synthetic_returns(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i as f64) * 0.73).sin() * 0.02).collect()
}

fn benchmark_pnl_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_pnl");

    for n in [1_000, 10_000, 100_000, 1_000_000] {
        let returns = synthetic_returns(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("scan", n), &returns, |b, returns| {
            b.iter(|| cumulative_pnl(black_box(returns)))
        });

        group.bench_with_input(BenchmarkId::new("buffer", n), &returns, |b, returns| {
            let mut out = vec![0.0; returns.len()];
            b.iter(|| {
                cumulative_pnl_into(black_box(returns), black_box(&mut out));
                out[out.len() - 1]
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pnl_paths);
criterion_main!(benches);
