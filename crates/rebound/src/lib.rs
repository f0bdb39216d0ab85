//! Rebound: a sliding-robot puzzle engine.
//!
//! Robots on a 16×16 walled board slide in straight lines until an
//! obstacle stops them; the aim is to park a robot of the right color on
//! a goal cell. This facade re-exports the public API from the Rebound
//! sub-crates — for most users, depending on `rebound` alone is enough.
//!
//! # Quick start
//!
//! ```rust
//! use rebound::prelude::*;
//!
//! // Deterministic: the same seed always yields the same board.
//! let puzzle = Puzzle::generate_seeded(7).unwrap();
//! assert_eq!(puzzle.goals.len(), 17);
//!
//! // Pick a goal and try a (probably wrong) one-move solution.
//! let goal = puzzle.goals[0];
//! let moves = [Move::new(Robot::Red, Direction::Up)];
//! let report = validate_solution(&puzzle.robots, &puzzle.walls, &moves, &goal);
//! println!("{}", report.outcome);
//!
//! // Replays are pure: the puzzle itself is untouched.
//! let replay = Puzzle::generate_seeded(7).unwrap();
//! assert_eq!(puzzle.robots, replay.robots);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `rebound-core` | Positions, robots, goals, moves, parsing, errors |
//! | [`board`] | `rebound-board` | Wall sets, goal placement, puzzle generation, rendering |
//! | [`sim`] | `rebound-sim` | Slide simulation and solution validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, robots, goals, moves, parsing, and error types
/// (`rebound-core`).
pub use rebound_core as core;

/// Wall storage, board synthesis, and ASCII rendering (`rebound-board`).
///
/// [`board::Puzzle::generate_seeded`] is the usual entry point; use
/// [`board::Puzzle::generate_with`] for custom placement budgets or an
/// external RNG.
pub use rebound_board as board;

/// Slide-until-obstacle movement and solution validation (`rebound-sim`).
pub use rebound_sim as sim;

/// Common imports for typical Rebound usage.
///
/// ```rust
/// use rebound::prelude::*;
/// ```
pub mod prelude {
    // Core vocabulary
    pub use rebound_core::{
        Direction, Goal, GoalColor, Move, Orientation, Position, Robot, RobotSet, BOARD_SIZE,
    };

    // Errors
    pub use rebound_core::{GenerationError, InvalidMoveError, ParseTokenError};

    // Parsing
    pub use rebound_core::parse_move_list;

    // Board generation
    pub use rebound_board::{PlacementConfig, Puzzle, WallSegment, WallSet};

    // Simulation and validation
    pub use rebound_sim::{
        apply_move, apply_moves, goal_reached, resting_position, validate_solution,
        SolutionOutcome, SolutionReport,
    };
}
