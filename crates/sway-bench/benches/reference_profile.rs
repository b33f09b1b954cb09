//! Criterion benchmarks for full simulation steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sway_bench::{reference_profile, stress_profile};
use sway_engine::Simulation;

fn bench_initialize_10k(c: &mut Criterion) {
    c.bench_function("initialize_10k", |b| {
        b.iter(|| {
            let sim = Simulation::new(reference_profile(42)).unwrap();
            black_box(sim.lattice().count_sources());
        });
    });
}

fn bench_step_10k(c: &mut Criterion) {
    c.bench_function("step_10k", |b| {
        b.iter_batched(
            || Simulation::new(reference_profile(42)).unwrap(),
            |mut sim| {
                for _ in 0..10 {
                    black_box(sim.step_once().unwrap());
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_step_100k(c: &mut Criterion) {
    c.bench_function("step_100k", |b| {
        b.iter_batched(
            || Simulation::new(stress_profile(42)).unwrap(),
            |mut sim| {
                black_box(sim.step_once().unwrap());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_run_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    group.sample_size(10);
    group.bench_function("run_to_convergence_10k", |b| {
        b.iter(|| {
            let outcome = Simulation::new(reference_profile(42))
                .unwrap()
                .run()
                .unwrap();
            black_box(outcome.steps());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_initialize_10k,
    bench_step_10k,
    bench_step_100k,
    bench_run_10k
);
criterion_main!(benches);
