//! Parsing the shared enum vocabulary from text.
//!
//! This is the only seam where malformed input can exist. HTTP and storage
//! layers hand over lowercase tokens ("red", "up", "any", "nw"); parsing is
//! case-insensitive and every failure carries the offending token. Once a
//! value is typed, nothing downstream re-validates it.

use crate::error::{InvalidMoveError, ParseTokenError};
use crate::goal::{GoalColor, Orientation};
use crate::position::Direction;
use crate::robot::{Move, Robot};
use std::str::FromStr;

impl FromStr for Robot {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Robot::Red),
            "yellow" => Ok(Robot::Yellow),
            "green" => Ok(Robot::Green),
            "blue" => Ok(Robot::Blue),
            _ => Err(ParseTokenError {
                expected: "robot",
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseTokenError {
                expected: "direction",
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for GoalColor {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(GoalColor::Red),
            "yellow" => Ok(GoalColor::Yellow),
            "green" => Ok(GoalColor::Green),
            "blue" => Ok(GoalColor::Blue),
            "any" => Ok(GoalColor::Any),
            _ => Err(ParseTokenError {
                expected: "goal color",
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nw" => Ok(Orientation::NorthWest),
            "ne" => Ok(Orientation::NorthEast),
            "sw" => Ok(Orientation::SouthWest),
            "se" => Ok(Orientation::SouthEast),
            _ => Err(ParseTokenError {
                expected: "orientation",
                token: s.to_string(),
            }),
        }
    }
}

/// Parse a submitted move list from `(robot, direction)` token pairs.
///
/// Validates every element before any simulation happens and reports the
/// first offending index, so a rejected submission names exactly which
/// move was malformed.
///
/// # Examples
///
/// ```
/// use rebound_core::parse::parse_move_list;
///
/// let moves = parse_move_list([("red", "up"), ("blue", "left")]).unwrap();
/// assert_eq!(moves.len(), 2);
///
/// let err = parse_move_list([("red", "up"), ("red", "diagonal")]).unwrap_err();
/// assert_eq!(err.index, 1);
/// ```
pub fn parse_move_list<'a, I>(pairs: I) -> Result<Vec<Move>, InvalidMoveError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (robot, direction))| {
            let robot = robot
                .parse::<Robot>()
                .map_err(|source| InvalidMoveError { index, source })?;
            let direction = direction
                .parse::<Direction>()
                .map_err(|source| InvalidMoveError { index, source })?;
            Ok(Move { robot, direction })
        })
        .collect()
}
