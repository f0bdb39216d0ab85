//! Benchmark fixtures for the Rebound puzzle engine.
//!
//! Provides deterministic pre-built inputs so benchmark runs are
//! comparable across machines and commits:
//!
//! - [`reference_puzzle`]: one fixed seeded board
//! - [`reference_move_sequence`]: a long deterministic move list over it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rebound_board::Puzzle;
use rebound_core::{Direction, Move, Robot};

/// The seed every benchmark fixture derives from.
pub const REFERENCE_SEED: u64 = 1_000_003;

/// Build the reference benchmark board.
///
/// Generation from a fixed seed cannot fail in practice; a failure here
/// means the placement budgets regressed, which the panic surfaces.
pub fn reference_puzzle() -> Puzzle {
    match Puzzle::generate_seeded(REFERENCE_SEED) {
        Ok(puzzle) => puzzle,
        Err(err) => panic!("reference seed stopped generating: {err}"),
    }
}

/// Build a deterministic move list of `len` moves.
///
/// Cycles robots and directions with co-prime strides so consecutive
/// moves hit different robots and axes, which is the shape of real
/// solution attempts.
pub fn reference_move_sequence(len: usize) -> Vec<Move> {
    (0..len)
        .map(|i| {
            let robot = Robot::ALL[i % 4];
            let direction = Direction::ALL[(i * 3 + 1) % 4];
            Move::new(robot, direction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_puzzle_is_stable() {
        let a = reference_puzzle();
        let b = reference_puzzle();
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.robots, b.robots);
    }

    #[test]
    fn move_sequence_varies_robot_and_direction() {
        let moves = reference_move_sequence(8);
        assert_eq!(moves.len(), 8);
        assert_ne!(moves[0].robot, moves[1].robot);
        assert_ne!(moves[0].direction, moves[1].direction);
    }
}
