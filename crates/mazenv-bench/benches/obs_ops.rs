//! Criterion micro-benchmarks for window extraction and encoding.

use criterion::{criterion_group, criterion_main, Criterion};
use mazenv_bench::{open_cells_sample, reference_maze, stress_maze};
use mazenv_obs::{encode_maze, WindowPlan};
use std::hint::black_box;

/// Benchmark: horizon-3 windows at 256 sampled cells, fast and boundary
/// paths mixed as they fall.
fn bench_window_2d(c: &mut Criterion) {
    let maze = reference_maze(42).unwrap();
    let centers = open_cells_sample(&maze, 256, 1);
    let plan = WindowPlan::new(2, 3).unwrap();

    c.bench_function("window_h3_100x100_256", |b| {
        b.iter(|| {
            for center in &centers {
                black_box(plan.extract(&maze, center).unwrap());
            }
        });
    });
}

/// Benchmark: horizon-1 windows in 3-D.
fn bench_window_3d(c: &mut Criterion) {
    let maze = stress_maze(42).unwrap();
    let centers = open_cells_sample(&maze, 256, 1);
    let plan = WindowPlan::new(3, 1).unwrap();

    c.bench_function("window_h1_24x24x24_256", |b| {
        b.iter(|| {
            for center in &centers {
                black_box(plan.extract(&maze, center).unwrap());
            }
        });
    });
}

/// Benchmark: one-hot encode the whole reference maze.
fn bench_encode_full(c: &mut Criterion) {
    let maze = reference_maze(42).unwrap();
    let agent = maze.start().unwrap().clone();

    c.bench_function("encode_maze_100x100", |b| {
        b.iter(|| black_box(encode_maze(&maze, &agent)));
    });
}

criterion_group!(benches, bench_window_2d, bench_window_3d, bench_encode_full);
criterion_main!(benches);
