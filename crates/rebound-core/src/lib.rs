//! Core types for the Rebound puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the board generator and the movement simulator:
//! grid positions, the four robots, the four movement directions, goal
//! colors, L-corner orientations, moves, and the error types every
//! fallible operation reports through.
//!
//! The enums here are deliberately closed: a value of [`Robot`] or
//! [`Direction`] is always well-formed, so the simulation layers never
//! re-validate their input. Untrusted text enters through the [`parse`]
//! module, which reports the first offending element instead of panicking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod goal;
pub mod parse;
pub mod position;
pub mod robot;

pub use error::{GenerationError, InvalidMoveError, ParseTokenError};
pub use goal::{Goal, GoalColor, Orientation};
pub use parse::parse_move_list;
pub use position::{Direction, Position, BOARD_SIZE};
pub use robot::{Move, Robot, RobotSet};
