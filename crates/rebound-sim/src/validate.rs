//! Solution validation: replay a move list and judge it against a goal.

use crate::slide::apply_moves;
use rebound_board::WallSet;
use rebound_core::{Goal, Move, Position, Robot, RobotSet};
use std::fmt;

/// The verdict on a submitted solution. A failed solution is an expected
/// outcome during play, not an error; the variants carry enough context
/// to tell the player what went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionOutcome {
    /// The required robot (or, for an any-robot goal, some robot) rests
    /// on the goal cell.
    Solved {
        /// The robot credited with reaching the goal. For any-robot
        /// goals with multiple robots on the cell (impossible at rest,
        /// but fixed by contract), the first in [`Robot::ALL`] order.
        winning_robot: Robot,
    },
    /// The designated robot ended somewhere else.
    RobotMissedGoal {
        /// The robot that was required to reach the goal.
        robot: Robot,
        /// The goal cell it missed.
        goal: Position,
    },
    /// No robot at all ended on an any-robot goal's cell.
    NoRobotReachedGoal {
        /// The goal cell.
        goal: Position,
    },
}

impl SolutionOutcome {
    /// `true` for [`SolutionOutcome::Solved`].
    pub const fn is_valid(&self) -> bool {
        matches!(self, SolutionOutcome::Solved { .. })
    }
}

impl fmt::Display for SolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { winning_robot } => {
                write!(f, "solved by the {winning_robot} robot")
            }
            Self::RobotMissedGoal { robot, goal } => {
                write!(f, "{robot} did not reach goal position {goal}")
            }
            Self::NoRobotReachedGoal { goal } => {
                write!(f, "no robot reached goal position {goal}")
            }
        }
    }
}

/// The verdict plus the robot configuration after the replay. Final
/// positions are reported even for failed solutions; the round layer
/// carries the winning submission's positions into the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolutionReport {
    /// The verdict.
    pub outcome: SolutionOutcome,
    /// Robot positions after replaying the whole move list.
    pub final_positions: RobotSet,
}

impl SolutionReport {
    /// `true` if the solution reaches the goal.
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// The robot satisfying `goal` in the current configuration, if any.
///
/// For a specific color, only that robot counts. For an any-robot goal,
/// robots are checked in [`Robot::ALL`] order and the first match wins.
pub fn goal_reached(robots: &RobotSet, goal: &Goal) -> Option<Robot> {
    match goal.color.robot() {
        Some(robot) => (robots.position(robot) == goal.position).then_some(robot),
        None => Robot::ALL
            .into_iter()
            .find(|&r| robots.position(r) == goal.position),
    }
}

/// Replay `moves` from `initial` and judge the result against `goal`.
///
/// Deterministic: the same inputs always produce the same report, so the
/// client-side practice check and the server's authoritative verification
/// of the same submission cannot disagree.
pub fn validate_solution(
    initial: &RobotSet,
    walls: &WallSet,
    moves: &[Move],
    goal: &Goal,
) -> SolutionReport {
    let final_positions = apply_moves(initial, walls, moves);
    let outcome = match goal_reached(&final_positions, goal) {
        Some(winning_robot) => SolutionOutcome::Solved { winning_robot },
        None => match goal.color.robot() {
            Some(robot) => SolutionOutcome::RobotMissedGoal {
                robot,
                goal: goal.position,
            },
            None => SolutionOutcome::NoRobotReachedGoal {
                goal: goal.position,
            },
        },
    };
    SolutionReport {
        outcome,
        final_positions,
    }
}
