//! Criterion micro-benchmarks for sampling, stamping, and coverage.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nova_core::IntervalId;
use nova_events::{BubbleStamper, CivilizationRegistry, EventSampler};
use nova_space::{DiskGrid, HitCountGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn galaxy_grid() -> DiskGrid {
    DiskGrid::new(50_000.0, 1_000.0, 200, 50).unwrap()
}

/// Benchmark: sample 10K event centres.
fn bench_sample_10k(c: &mut Criterion) {
    let sampler = EventSampler::for_grid(&galaxy_grid());
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("sample_10k", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(sampler.sample(&mut rng));
            }
        });
    });
}

/// Benchmark: stamp 10K events of radius 50 into the 2M-cell galaxy grid.
fn bench_stamp_10k_galaxy(c: &mut Criterion) {
    let grid = galaxy_grid();
    let sampler = EventSampler::for_grid(&grid);
    let stamper = BubbleStamper::new(&grid, 50.0).unwrap();
    let mut hits = HitCountGrid::zeroed(&grid);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let centres: Vec<_> = (0..10_000).map(|_| sampler.sample(&mut rng)).collect();

    c.bench_function("stamp_10k_galaxy", |b| {
        b.iter(|| {
            for centre in &centres {
                black_box(stamper.stamp(&grid, &mut hits, centre));
            }
        });
    });
}

/// Benchmark: a bubble spanning many cells (radius 2000 on the galaxy grid).
fn bench_stamp_wide_bubble(c: &mut Criterion) {
    let grid = galaxy_grid();
    let stamper = BubbleStamper::new(&grid, 2_000.0).unwrap();
    let mut hits = HitCountGrid::zeroed(&grid);
    let centre = nova_core::Point3::new(1_234.0, -5_678.0, 12.0);

    c.bench_function("stamp_wide_bubble", |b| {
        b.iter(|| black_box(stamper.stamp(&grid, &mut hits, &centre)));
    });
}

/// Benchmark: single-pass threshold counts over the galaxy grid.
fn bench_threshold_counts_galaxy(c: &mut Criterion) {
    let grid = galaxy_grid();
    let sampler = EventSampler::for_grid(&grid);
    let stamper = BubbleStamper::new(&grid, 500.0).unwrap();
    let mut hits = HitCountGrid::zeroed(&grid);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..5_000 {
        stamper.stamp(&grid, &mut hits, &sampler.sample(&mut rng));
    }

    c.bench_function("threshold_counts_galaxy", |b| {
        b.iter(|| black_box(hits.threshold_counts(5)));
    });
}

/// Benchmark: extinction scan over 10K living civilizations.
fn bench_extinction_scan_10k(c: &mut Criterion) {
    let grid = galaxy_grid();
    let sampler = EventSampler::for_grid(&grid);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut civs = CivilizationRegistry::new();
    civs.spawn(10_000, &sampler, &mut rng, IntervalId(0));
    // Far outside the disk: scans every civilization without killing any.
    let miss = nova_core::Point3::new(1e9, 1e9, 0.0);

    c.bench_function("extinction_scan_10k", |b| {
        b.iter(|| black_box(civs.apply_extinction(&miss, 50.0, IntervalId(1))));
    });
}

criterion_group!(
    benches,
    bench_sample_10k,
    bench_stamp_10k_galaxy,
    bench_stamp_wide_bubble,
    bench_threshold_counts_galaxy,
    bench_extinction_scan_10k,
);
criterion_main!(benches);
