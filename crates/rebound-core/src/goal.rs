//! Goals and L-corner orientations.

use crate::position::Position;
use crate::robot::Robot;
use std::fmt;

/// The color tag of a goal.
///
/// A specific color is satisfied only by the robot of that color; `Any` is
/// satisfied by whichever robot reaches the goal cell.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GoalColor {
    Red,
    Yellow,
    Green,
    Blue,
    Any,
}

impl GoalColor {
    /// The four specific colors, in [`Robot::ALL`] order. Excludes `Any`.
    pub const SPECIFIC: [GoalColor; 4] = [
        GoalColor::Red,
        GoalColor::Yellow,
        GoalColor::Green,
        GoalColor::Blue,
    ];

    /// The robot that must reach a goal of this color, or `None` for `Any`.
    pub const fn robot(self) -> Option<Robot> {
        match self {
            GoalColor::Red => Some(Robot::Red),
            GoalColor::Yellow => Some(Robot::Yellow),
            GoalColor::Green => Some(Robot::Green),
            GoalColor::Blue => Some(Robot::Blue),
            GoalColor::Any => None,
        }
    }
}

impl From<Robot> for GoalColor {
    fn from(robot: Robot) -> Self {
        match robot {
            Robot::Red => GoalColor::Red,
            Robot::Yellow => GoalColor::Yellow,
            Robot::Green => GoalColor::Green,
            Robot::Blue => GoalColor::Blue,
        }
    }
}

impl fmt::Display for GoalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalColor::Red => "red",
            GoalColor::Yellow => "yellow",
            GoalColor::Green => "green",
            GoalColor::Blue => "blue",
            GoalColor::Any => "any",
        };
        f.pad(name)
    }
}

/// One goal cell on the board.
///
/// A puzzle carries exactly 17 goals: four of each specific color plus one
/// `Any`, no two sharing a position. Goals are created once during
/// generation and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Goal {
    /// The cell a robot must come to rest on.
    pub position: Position,
    /// Which robot(s) satisfy the goal.
    pub color: GoalColor,
}

impl Goal {
    /// Convenience constructor.
    pub const fn new(position: Position, color: GoalColor) -> Self {
        Self { position, color }
    }
}

/// Orientation of an L-shaped wall corner anchored at a goal cell.
///
/// Names which two of the cell's four edges carry walls: `NorthWest` walls
/// the top and left edges, `SouthEast` the bottom and right edges, and so
/// on. The goal sits in the pocket of the angle.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Orientation {
    /// All orientations, in a fixed order.
    pub const ALL: [Orientation; 4] = [
        Orientation::NorthWest,
        Orientation::NorthEast,
        Orientation::SouthWest,
        Orientation::SouthEast,
    ];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::NorthWest => "nw",
            Orientation::NorthEast => "ne",
            Orientation::SouthWest => "sw",
            Orientation::SouthEast => "se",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_colors_map_to_robots() {
        for (color, robot) in GoalColor::SPECIFIC.into_iter().zip(Robot::ALL) {
            assert_eq!(color.robot(), Some(robot));
            assert_eq!(GoalColor::from(robot), color);
        }
    }

    #[test]
    fn any_has_no_robot() {
        assert_eq!(GoalColor::Any.robot(), None);
    }
}
