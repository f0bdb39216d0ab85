//! Slide-movement simulation and solution validation.
//!
//! A robot slides in a straight line until an obstacle — a wall, the
//! board edge, or another robot — stops it; it cannot stop voluntarily.
//! The same deterministic replay serves instant local feedback during
//! play and authoritative server-side verification of submitted
//! solutions: identical inputs always yield identical verdicts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod slide;
pub mod validate;

pub use slide::{apply_move, apply_moves, resting_position};
pub use validate::{goal_reached, validate_solution, SolutionOutcome, SolutionReport};
