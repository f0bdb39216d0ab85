//! Board synthesis for the Rebound puzzle engine.
//!
//! Builds complete 16×16 boards: the fixed skeleton (enclosed 2×2 center
//! block, eight random outer-edge walls), seventeen goals each paired with
//! an L-shaped wall corner placed under separation and reachability
//! constraints, and random robot start positions. The entry point is
//! [`Puzzle::generate`] (or [`Puzzle::generate_seeded`] for reproducible
//! boards); lower modules are public because the simulator and tests
//! query them directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod corner;
pub mod draw;
pub mod generate;
pub mod goals;
pub mod skeleton;
pub mod walls;

pub use corner::LShapeCorner;
pub use generate::Puzzle;
pub use goals::{GoalLayout, PlacementConfig, Quadrant};
pub use walls::{WallSegment, WallSet};
