//! Benchmarks for the two engines on the reference fixtures and on
//! scaled-up synthetic grids.

use criterion::{criterion_group, criterion_main, Criterion};
use prism_engine::{AccessibilityReduction, BeamPropagation};
use prism_grid::Grid;
use prism_test_utils::{beam_sample_grid, roll_sample_grid};
use std::hint::black_box;

/// A tall beam grid: start centered in row 0, splitters every other row.
fn tall_beam_grid(rows: usize, cols: usize) -> Grid {
    let mut cells = vec![vec!['.'; cols]; rows];
    cells[0][cols / 2] = 'S';
    for (r, row) in cells.iter_mut().enumerate().skip(1) {
        if r % 2 == 0 {
            for (c, cell) in row.iter_mut().enumerate() {
                if c % 3 == 0 {
                    *cell = '^';
                }
            }
        }
    }
    Grid::from_rows(cells)
}

/// A dense roll field with a sparse lattice of gaps.
fn dense_roll_grid(rows: usize, cols: usize) -> Grid {
    let cells = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| if (r * cols + c) % 7 == 0 { '.' } else { '@' })
                .collect()
        })
        .collect();
    Grid::from_rows(cells)
}

fn bench_beam(c: &mut Criterion) {
    let engine = BeamPropagation::builder().build().unwrap();
    let sample = beam_sample_grid();
    let tall = tall_beam_grid(200, 101);

    c.bench_function("beam/sample_16_rows", |b| {
        b.iter(|| engine.run(black_box(&sample)).unwrap())
    });
    c.bench_function("beam/tall_200x101", |b| {
        b.iter(|| engine.run(black_box(&tall)).unwrap())
    });
}

fn bench_reduction(c: &mut Criterion) {
    let engine = AccessibilityReduction::builder().build().unwrap();
    let sample = roll_sample_grid();
    let dense = dense_roll_grid(64, 64);

    c.bench_function("reduction/survey_10x10", |b| {
        b.iter(|| engine.survey(black_box(&sample)))
    });
    c.bench_function("reduction/reduce_10x10", |b| {
        b.iter(|| engine.reduce(black_box(&sample)))
    });
    c.bench_function("reduction/reduce_64x64_dense", |b| {
        b.iter(|| engine.reduce(black_box(&dense)))
    });
}

criterion_group!(benches, bench_beam, bench_reduction);
criterion_main!(benches);
