//! Benchmarks for the statistics and full-pass hot paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use boxplot_stats::{
    bin_samples, compute_stats, plot_pass, BoxLayoutConfig, LinearAxis, PointMode, TraceConfig,
};

fn generate_samples(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(50.0, 15.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Positions cycling over `categories` distinct values
fn generate_positions(n: usize, categories: usize) -> Vec<f64> {
    (0..n).map(|i| (i % categories) as f64).collect()
}

fn bench_compute_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");

    for &size in &[100usize, 1_000, 10_000, 100_000] {
        let samples = generate_samples(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| black_box(compute_stats(0.0, black_box(samples.clone()))));
        });
    }

    group.finish();
}

fn bench_bin_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("bin_samples");

    for &categories in &[1usize, 10, 100] {
        let samples = generate_samples(10_000, 7);
        let positions = generate_positions(10_000, categories);
        group.bench_with_input(
            BenchmarkId::new("10k_samples", categories),
            &(&positions, &samples),
            |b, &(positions, samples)| {
                b.iter(|| black_box(bin_samples(black_box(positions), black_box(samples))));
            },
        );
    }

    group.finish();
}

fn bench_plot_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_pass");

    for &num_traces in &[1usize, 4, 16] {
        let mut rng = StdRng::seed_from_u64(11);
        let traces: Vec<TraceConfig> = (0..num_traces)
            .map(|_| {
                let n = 1_000;
                TraceConfig {
                    positions: Some(generate_positions(n, 8)),
                    samples: (0..n).map(|_| rng.gen_range(0.0..100.0)).collect(),
                    ..TraceConfig::default()
                }
                .with_point_mode(PointMode::All)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("1k_samples_each", num_traces),
            &traces,
            |b, traces| {
                b.iter(|| {
                    let mut x = LinearAxis::new([0.0, 1.0], 800.0);
                    let mut y = LinearAxis::new([0.0, 1.0], 600.0);
                    black_box(plot_pass(
                        black_box(traces),
                        &BoxLayoutConfig::grouped(),
                        &mut x,
                        &mut y,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_stats,
    bench_bin_samples,
    bench_plot_pass
);
criterion_main!(benches);
