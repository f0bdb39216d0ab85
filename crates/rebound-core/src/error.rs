//! Error types for the Rebound puzzle engine.
//!
//! Every failure mode in the engine is an explicit value the caller
//! branches on; nothing here is designed to be fatal. One enum per
//! failure domain: generation exhaustion, and malformed text at the
//! parsing boundary.

use crate::robot::Robot;
use std::error::Error;
use std::fmt;

/// Errors from puzzle generation.
///
/// Generation is randomized search under hard attempt caps; exhausting a
/// cap is rare but must be handled. A caller that receives one of these
/// holds no partial puzzle — the failed attempt's state has already been
/// discarded — and may simply retry at the whole-game level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// The goal placement engine could not satisfy all constraints within
    /// its retry budget.
    GoalPlacementExhausted {
        /// How many full placement attempts were made.
        retries: u32,
    },
    /// Rejection sampling for a robot start cell hit its defensive cap.
    /// Practically unreachable: at most 21 of 256 cells are excluded.
    RobotPlacementExhausted {
        /// The robot that could not be placed.
        robot: Robot,
        /// How many cells were sampled.
        attempts: u32,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoalPlacementExhausted { retries } => {
                write!(f, "failed to generate all 17 goals after {retries} retries")
            }
            Self::RobotPlacementExhausted { robot, attempts } => {
                write!(
                    f,
                    "failed to place the {robot} robot after {attempts} rejection samples"
                )
            }
        }
    }
}

impl Error for GenerationError {}

/// A token at the parsing boundary did not name a known enum value.
///
/// Returned by the `FromStr` impls for [`Robot`](crate::Robot),
/// [`Direction`](crate::Direction), [`GoalColor`](crate::GoalColor), and
/// [`Orientation`](crate::Orientation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTokenError {
    /// What kind of value was expected ("robot", "direction", ...).
    pub expected: &'static str,
    /// The offending input token.
    pub token: String,
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.expected, self.token)
    }
}

impl Error for ParseTokenError {}

/// A move list contained a malformed element.
///
/// Reports the first offending index, matching the contract that callers
/// validate whole submissions before simulating them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMoveError {
    /// Zero-based index of the first malformed move.
    pub index: usize,
    /// What was wrong with it.
    pub source: ParseTokenError,
}

impl fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move at index {}: {}", self.index, self.source)
    }
}

impl Error for InvalidMoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_messages() {
        let err = GenerationError::GoalPlacementExhausted { retries: 10 };
        assert_eq!(
            err.to_string(),
            "failed to generate all 17 goals after 10 retries"
        );

        let err = GenerationError::RobotPlacementExhausted {
            robot: Robot::Blue,
            attempts: 1024,
        };
        assert_eq!(
            err.to_string(),
            "failed to place the blue robot after 1024 rejection samples"
        );
    }

    #[test]
    fn invalid_move_reports_index_and_cause() {
        let err = InvalidMoveError {
            index: 3,
            source: ParseTokenError {
                expected: "direction",
                token: "sideways".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid move at index 3: unknown direction 'sideways'"
        );
    }
}
