//! Criterion benchmarks for solaroven_core simulation
//!
//! Run with: cargo bench -p solaroven_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use solaroven_core::SessionConfig;
use solaroven_core::analysis::{summarize, summarize_ensemble};
use solaroven_core::simulation::{monte_carlo_simulate, simulate};

fn fine_grained_config(interval_minutes: f64) -> SessionConfig {
    SessionConfig {
        sample_interval_minutes: interval_minutes,
        ..Default::default()
    }
}

fn bench_single_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_session");

    for interval in [5.0, 1.0, 0.1] {
        let config = fine_grained_config(interval);
        group.bench_with_input(
            BenchmarkId::new("interval_minutes", interval),
            &config,
            |b, config| b.iter(|| simulate(black_box(config), black_box(42))),
        );
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let config = SessionConfig::default();
    let result = simulate(&config, 42).expect("default config is valid");

    c.bench_function("summarize_default_session", |b| {
        b.iter(|| summarize(black_box(&result), black_box(&config)))
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);

    let config = SessionConfig::default();
    for iterations in [100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("iterations", iterations),
            &iterations,
            |b, &n| {
                b.iter(|| {
                    let mc = monte_carlo_simulate(black_box(&config), n, 42)
                        .expect("default config is valid");
                    summarize_ensemble(&mc, &config)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_session, bench_summarize, bench_monte_carlo);
criterion_main!(benches);
