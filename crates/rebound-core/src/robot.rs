//! Robots, robot moves, and the four-slot position set.

use crate::position::{Direction, Position};
use std::fmt;
use std::ops;

/// The four robots, identified by color.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Robot {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Robot {
    /// All robots in the fixed evaluation order.
    ///
    /// This order decides ties when an "any" goal could be credited to more
    /// than one robot, so it is part of the validator contract.
    pub const ALL: [Robot; 4] = [Robot::Red, Robot::Yellow, Robot::Green, Robot::Blue];

    const fn slot(self) -> usize {
        match self {
            Robot::Red => 0,
            Robot::Yellow => 1,
            Robot::Green => 2,
            Robot::Blue => 3,
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Robot::Red => "red",
            Robot::Yellow => "yellow",
            Robot::Green => "green",
            Robot::Blue => "blue",
        };
        f.pad(name)
    }
}

/// One robot move: which robot slides, and in which direction.
///
/// Ephemeral by design: constructed by a caller, consumed immediately by
/// the simulator. Both fields are closed enums, so a `Move` is always
/// well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The robot to slide.
    pub robot: Robot,
    /// The direction to slide in.
    pub direction: Direction,
}

impl Move {
    /// Convenience constructor.
    pub const fn new(robot: Robot, direction: Direction) -> Self {
        Self { robot, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.robot, self.direction)
    }
}

/// The positions of all four robots.
///
/// Exactly one position per robot. At rest the four positions are pairwise
/// distinct; the simulator preserves this because a sliding robot stops
/// before entering an occupied cell. `RobotSet` is a small `Copy` value —
/// applying a move produces a new set rather than mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RobotSet {
    positions: [Position; 4],
}

impl RobotSet {
    /// Build a set from one position per robot, in [`Robot::ALL`] order.
    pub const fn new(red: Position, yellow: Position, green: Position, blue: Position) -> Self {
        Self {
            positions: [red, yellow, green, blue],
        }
    }

    /// The current position of `robot`.
    pub const fn position(&self, robot: Robot) -> Position {
        self.positions[robot.slot()]
    }

    /// A copy of this set with `robot` relocated to `position`.
    pub fn with_position(&self, robot: Robot, position: Position) -> Self {
        let mut positions = self.positions;
        positions[robot.slot()] = position;
        Self { positions }
    }

    /// Iterate `(robot, position)` pairs in [`Robot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Robot, Position)> + '_ {
        Robot::ALL.into_iter().map(|r| (r, self.position(r)))
    }

    /// The robot resting on `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<Robot> {
        self.iter().find(|&(_, p)| p == position).map(|(r, _)| r)
    }

    /// `true` if no two robots share a cell.
    pub fn all_distinct(&self) -> bool {
        for i in 0..4 {
            for j in (i + 1)..4 {
                if self.positions[i] == self.positions[j] {
                    return false;
                }
            }
        }
        true
    }
}

impl ops::Index<Robot> for RobotSet {
    type Output = Position;

    fn index(&self, robot: Robot) -> &Self::Output {
        &self.positions[robot.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    fn sample() -> RobotSet {
        RobotSet::new(p(0, 0), p(1, 0), p(2, 0), p(3, 0))
    }

    #[test]
    fn position_lookup_per_robot() {
        let set = sample();
        assert_eq!(set.position(Robot::Red), p(0, 0));
        assert_eq!(set.position(Robot::Yellow), p(1, 0));
        assert_eq!(set.position(Robot::Green), p(2, 0));
        assert_eq!(set.position(Robot::Blue), p(3, 0));
        assert_eq!(set[Robot::Blue], p(3, 0));
    }

    #[test]
    fn with_position_leaves_input_untouched() {
        let set = sample();
        let moved = set.with_position(Robot::Green, p(2, 9));
        assert_eq!(set.position(Robot::Green), p(2, 0));
        assert_eq!(moved.position(Robot::Green), p(2, 9));
        assert_eq!(moved.position(Robot::Red), p(0, 0));
    }

    #[test]
    fn occupant_finds_robot() {
        let set = sample();
        assert_eq!(set.occupant(p(2, 0)), Some(Robot::Green));
        assert_eq!(set.occupant(p(9, 9)), None);
    }

    #[test]
    fn all_distinct_detects_overlap() {
        assert!(sample().all_distinct());
        let clash = sample().with_position(Robot::Blue, p(0, 0));
        assert!(!clash.all_distinct());
    }

    #[test]
    fn iter_follows_fixed_order() {
        let robots: Vec<Robot> = sample().iter().map(|(r, _)| r).collect();
        assert_eq!(robots, Robot::ALL);
    }
}
