//! Criterion benchmarks for the three solvers.
//!
//! Instances come from the seeded generator so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mule_balance::exact::ExactRunner;
use mule_balance::greedy::GreedyRunner;
use mule_balance::instance::{generate, CapacityMode, GeneratorConfig};
use mule_balance::local::{HillClimbingConfig, HillClimbingRunner};
use mule_balance::model::Instance;

fn instance(num_items: usize, num_containers: usize) -> Instance {
    let config = GeneratorConfig::default()
        .with_num_items(num_items)
        .with_num_containers(num_containers)
        .with_weight_range(1, 10)
        .with_value_range(10, 50)
        .with_capacity(CapacityMode::Auto)
        .with_seed(42);
    match generate(&config) {
        Ok(inst) => inst,
        Err(e) => panic!("benchmark instance: {e}"),
    }
}

// ===========================================================================
// Exact: small instances only
// ===========================================================================

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);

    for (n, m) in [(6usize, 2usize), (8, 3), (10, 3)] {
        let inst = instance(n, m);
        group.bench_with_input(BenchmarkId::new(format!("n{n}_m{m}"), n), &inst, |b, i| {
            b.iter(|| black_box(ExactRunner::run(black_box(i))))
        });
    }
    group.finish();
}

// ===========================================================================
// Greedy and hill climbing
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for (n, m) in [(20usize, 3usize), (100, 5), (1000, 10)] {
        let inst = instance(n, m);
        group.bench_with_input(BenchmarkId::new(format!("n{n}_m{m}"), n), &inst, |b, i| {
            b.iter(|| black_box(GreedyRunner::run(black_box(i))))
        });
    }
    group.finish();
}

fn bench_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climbing");
    group.sample_size(20);

    let config = HillClimbingConfig::default();
    for (n, m) in [(20usize, 3usize), (100, 5), (1000, 10)] {
        let inst = instance(n, m);
        group.bench_with_input(BenchmarkId::new(format!("n{n}_m{m}"), n), &inst, |b, i| {
            b.iter(|| black_box(HillClimbingRunner::run(black_box(i), black_box(&config)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_greedy, bench_hill_climbing);
criterion_main!(benches);
