//! The slide-until-obstacle movement simulator.

use rebound_board::WallSet;
use rebound_core::{Direction, Move, Position, Robot, RobotSet};

/// Where `robot` comes to rest when it slides in `direction`.
///
/// Advances one cell at a time and stops when the next step would leave
/// the board, cross a wall, or enter an occupied cell. A robot that
/// cannot advance rests where it started; there is no failed move. The
/// result is maximal, so repeating the move from it is a no-op.
pub fn resting_position(
    robots: &RobotSet,
    walls: &WallSet,
    robot: Robot,
    direction: Direction,
) -> Position {
    let mut current = robots.position(robot);
    loop {
        if walls.is_blocking(current, direction) {
            return current;
        }
        let Some(next) = current.step(direction) else {
            return current;
        };
        if robots.iter().any(|(r, p)| r != robot && p == next) {
            return current;
        }
        current = next;
    }
}

/// Apply one move, returning a new [`RobotSet`] with only the moved
/// robot's slot updated. The input set is not mutated.
pub fn apply_move(robots: &RobotSet, walls: &WallSet, mov: Move) -> RobotSet {
    let rest = resting_position(robots, walls, mov.robot, mov.direction);
    robots.with_position(mov.robot, rest)
}

/// Apply an ordered move sequence.
///
/// Each move sees the cumulative effect of all earlier moves in the same
/// call: robots block each other mid-sequence, and the same robot may
/// move any number of times.
pub fn apply_moves(robots: &RobotSet, walls: &WallSet, moves: &[Move]) -> RobotSet {
    moves
        .iter()
        .fold(*robots, |set, &mov| apply_move(&set, walls, mov))
}
