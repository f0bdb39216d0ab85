//! Criterion benchmarks for board generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rebound_board::{goals, skeleton, PlacementConfig, Puzzle};

/// Benchmark: one full puzzle generation (skeleton + 17 goals + robots).
fn bench_generate_full_puzzle(c: &mut Criterion) {
    c.bench_function("generate_full_puzzle", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let puzzle = Puzzle::generate_seeded(seed);
            black_box(&puzzle);
        });
    });
}

/// Benchmark: skeleton construction alone, to separate the fixed cost
/// from the randomized goal search.
fn bench_build_skeleton(c: &mut Criterion) {
    c.bench_function("build_skeleton", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        b.iter(|| {
            let walls = skeleton::build_skeleton(&mut rng);
            black_box(&walls);
        });
    });
}

/// Benchmark: goal placement over a fixed skeleton. This is the
/// dominant cost of generation; the retry loop's behavior under the
/// default budgets is what this tracks.
fn bench_place_goals(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let skeleton = skeleton::build_skeleton(&mut rng);
    let config = PlacementConfig::default();

    c.bench_function("place_goals", |b| {
        b.iter(|| {
            let layout = goals::place_goals(&skeleton, &config, &mut rng);
            black_box(&layout);
        });
    });
}

criterion_group!(
    benches,
    bench_generate_full_puzzle,
    bench_build_skeleton,
    bench_place_goals
);
criterion_main!(benches);
