//! Puzzle orchestration: skeleton, goals, and robot starts.

use crate::draw;
use crate::goals::{place_goals, PlacementConfig};
use crate::skeleton::{build_skeleton, center_cells};
use crate::walls::WallSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rebound_core::{GenerationError, Goal, Position, Robot, RobotSet};
use std::fmt;

/// One complete generated puzzle: finalized walls, the initial robot
/// positions, and all 17 goals.
///
/// Created once per game. The walls and goals are immutable for the
/// game's lifetime; the robot set inside is a snapshot of the starting
/// configuration, not the live round state — round logic carries its own
/// evolving [`RobotSet`] forward.
#[derive(Clone)]
pub struct Puzzle {
    /// All interior walls: skeleton plus goal-corner segments.
    pub walls: WallSet,
    /// Initial robot positions.
    pub robots: RobotSet,
    /// All 17 goals, the any-robot goal last.
    pub goals: Vec<Goal>,
}

impl Puzzle {
    /// Generate a puzzle with default attempt budgets.
    pub fn generate(rng: &mut impl Rng) -> Result<Self, GenerationError> {
        Self::generate_with(&PlacementConfig::default(), rng)
    }

    /// Generate a reproducible puzzle: the same seed always yields the
    /// same board.
    pub fn generate_seeded(seed: u64) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    /// Generate a puzzle with explicit attempt budgets.
    ///
    /// Sequence: build the skeleton (center block + outer-edge walls),
    /// run goal placement, then drop the four robots on uniform random
    /// cells avoiding the center block, every goal cell, and each other.
    /// A goal placement failure propagates — no partial puzzle is ever
    /// returned.
    pub fn generate_with(
        config: &PlacementConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, GenerationError> {
        let skeleton = build_skeleton(rng);
        let layout = place_goals(&skeleton, config, rng)?;
        let robots = place_robots(&layout.goals, config, rng)?;
        Ok(Self {
            walls: layout.walls,
            robots,
            goals: layout.goals,
        })
    }

    /// Render the board as ASCII art (walls, goals, robot initials).
    pub fn render(&self) -> String {
        draw::render(&self.walls, Some(&self.robots), &self.goals)
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Place the four robots by rejection sampling.
///
/// Each robot independently samples uniform cells until it finds one that
/// is not a center-block cell, not a goal cell, and not taken by an
/// earlier robot. The cap exists only to bound the loop; with at most 21
/// excluded cells out of 256 it does not bind in practice.
fn place_robots(
    goals: &[Goal],
    config: &PlacementConfig,
    rng: &mut impl Rng,
) -> Result<RobotSet, GenerationError> {
    let mut excluded: Vec<Position> = center_cells().to_vec();
    excluded.extend(goals.iter().map(|g| g.position));

    let mut placed: Vec<Position> = Vec::with_capacity(4);
    for robot in Robot::ALL {
        let position = sample_free_cell(&excluded, config.robot_tries, rng).ok_or(
            GenerationError::RobotPlacementExhausted {
                robot,
                attempts: config.robot_tries,
            },
        )?;
        excluded.push(position);
        placed.push(position);
    }

    Ok(RobotSet::new(placed[0], placed[1], placed[2], placed[3]))
}

fn sample_free_cell(excluded: &[Position], tries: u32, rng: &mut impl Rng) -> Option<Position> {
    for _ in 0..tries {
        let candidate = Position::from_index(rng.gen::<u8>());
        if !excluded.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::validate_goals;

    #[test]
    fn generated_puzzle_upholds_invariants() {
        let puzzle = Puzzle::generate_seeded(42).unwrap();

        assert!(validate_goals(&puzzle.goals));
        // 8 center + 8 outer-edge + 17 corners x 2.
        assert_eq!(puzzle.walls.len(), 50);
        assert!(puzzle.robots.all_distinct());

        let goal_cells: Vec<Position> = puzzle.goals.iter().map(|g| g.position).collect();
        for (robot, position) in puzzle.robots.iter() {
            assert!(
                !goal_cells.contains(&position),
                "{robot} starts on a goal cell"
            );
            assert!(
                !center_cells().contains(&position),
                "{robot} starts in the center block"
            );
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = Puzzle::generate_seeded(1234).unwrap();
        let b = Puzzle::generate_seeded(1234).unwrap();
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.robots, b.robots);
        assert_eq!(a.goals, b.goals);
    }

    #[test]
    fn different_seeds_differ() {
        let a = Puzzle::generate_seeded(1).unwrap();
        let b = Puzzle::generate_seeded(2).unwrap();
        // Walls are the most entropy-rich component; two independent
        // boards colliding would be astronomically unlikely.
        assert_ne!(a.walls, b.walls);
    }

    #[test]
    fn robot_placement_cap_surfaces_as_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let config = PlacementConfig {
            robot_tries: 0,
            ..PlacementConfig::default()
        };
        let err = Puzzle::generate_with(&config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::RobotPlacementExhausted {
                robot: Robot::Red,
                attempts: 0
            }
        );
    }
}
