//! Criterion benchmarks for movement simulation and validation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rebound_bench::{reference_move_sequence, reference_puzzle};
use rebound_core::{Direction, Robot};
use rebound_sim::{apply_moves, resting_position, validate_solution};

/// Benchmark: a single slide query on a real generated board.
fn bench_resting_position(c: &mut Criterion) {
    let puzzle = reference_puzzle();

    c.bench_function("resting_position", |b| {
        b.iter(|| {
            for robot in Robot::ALL {
                for direction in Direction::ALL {
                    let rest = resting_position(&puzzle.robots, &puzzle.walls, robot, direction);
                    black_box(rest);
                }
            }
        });
    });
}

/// Benchmark: replay of a 1000-move sequence, the shape of a server
/// re-verifying a burst of submissions.
fn bench_apply_moves_1k(c: &mut Criterion) {
    let puzzle = reference_puzzle();
    let moves = reference_move_sequence(1000);

    c.bench_function("apply_moves_1k", |b| {
        b.iter(|| {
            let after = apply_moves(&puzzle.robots, &puzzle.walls, &moves);
            black_box(after);
        });
    });
}

/// Benchmark: full solution validation of a short move list against
/// every goal on the board.
fn bench_validate_solution_all_goals(c: &mut Criterion) {
    let puzzle = reference_puzzle();
    let moves = reference_move_sequence(10);

    c.bench_function("validate_solution_all_goals", |b| {
        b.iter(|| {
            for goal in &puzzle.goals {
                let report = validate_solution(&puzzle.robots, &puzzle.walls, &moves, goal);
                black_box(report);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resting_position,
    bench_apply_moves_1k,
    bench_validate_solution_all_goals
);
criterion_main!(benches);
