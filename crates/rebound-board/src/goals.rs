//! Quadrant-based goal placement with bounded retries.
//!
//! Places 17 goals — one per color per quadrant plus a single "any-robot"
//! goal in a random quadrant — each paired with an L-shaped wall corner
//! that passes the layered checks in [`crate::corner::can_place`].
//!
//! Each attempt works on a fresh clone of the skeleton walls; a failed
//! attempt is discarded wholesale, so retries never see stale corners.
//! Only the winning attempt's walls are returned.

use crate::corner::{add_corner, can_place, random_orientation, LShapeCorner};
use crate::walls::WallSet;
use rand::Rng;
use rebound_core::{GenerationError, Goal, GoalColor, Position, BOARD_SIZE};

/// Attempt budgets for randomized placement.
///
/// The defaults match the generous constraint space: placement virtually
/// always succeeds on the first attempt, and every loop is capped so
/// generation terminates by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Whole-generation retries before reporting failure.
    pub max_retries: u32,
    /// Position/orientation samples per single-color goal.
    pub goal_tries: u32,
    /// Position/orientation samples for the extra any-robot goal.
    pub any_goal_tries: u32,
    /// Rejection samples per robot start cell.
    pub robot_tries: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            goal_tries: 500,
            any_goal_tries: 200,
            robot_tries: 1024,
        }
    }
}

/// One of the four 6×6 placement regions.
///
/// Quadrants exclude the outer boundary ring and stop short of the center
/// rows/columns 7–8, leaving a natural buffer around the blocked center
/// square.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// All quadrants, in a fixed order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Inclusive `(x, y)` coordinate ranges of this quadrant.
    pub const fn bounds(self) -> ((u8, u8), (u8, u8)) {
        match self {
            Quadrant::NorthWest => ((1, 6), (1, 6)),
            Quadrant::NorthEast => ((9, 14), (1, 6)),
            Quadrant::SouthWest => ((1, 6), (9, 14)),
            Quadrant::SouthEast => ((9, 14), (9, 14)),
        }
    }

    /// `true` if `position` lies inside this quadrant.
    pub fn contains(self, position: Position) -> bool {
        let ((x_lo, x_hi), (y_lo, y_hi)) = self.bounds();
        (x_lo..=x_hi).contains(&position.x()) && (y_lo..=y_hi).contains(&position.y())
    }

    /// Sample a uniform random cell inside this quadrant.
    pub fn sample(self, rng: &mut impl Rng) -> Position {
        let ((x_lo, x_hi), (y_lo, y_hi)) = self.bounds();
        let x = rng.gen_range(x_lo..=x_hi);
        let y = rng.gen_range(y_lo..=y_hi);
        Position::from_index(y * BOARD_SIZE + x)
    }
}

/// The output of a successful placement run: the walls with all corner
/// segments committed, the 17 goals, and their corners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalLayout {
    /// Skeleton walls plus all 34 committed corner segments.
    pub walls: WallSet,
    /// All 17 goals, the any-robot goal last.
    pub goals: Vec<Goal>,
    /// The corner paired with each goal, same order.
    pub corners: Vec<LShapeCorner>,
}

/// Place all 17 goals on top of the skeleton walls.
///
/// Runs up to `config.max_retries` full attempts. Within an attempt, each
/// quadrant receives one goal of each color (up to `config.goal_tries`
/// samples per goal), then one any-robot goal lands in a uniformly chosen
/// quadrant (up to `config.any_goal_tries` samples). Exhausting any
/// sample budget abandons the attempt.
pub fn place_goals(
    skeleton: &WallSet,
    config: &PlacementConfig,
    rng: &mut impl Rng,
) -> Result<GoalLayout, GenerationError> {
    for _ in 0..config.max_retries {
        if let Some(layout) = attempt(skeleton, config, rng) {
            return Ok(layout);
        }
    }
    Err(GenerationError::GoalPlacementExhausted {
        retries: config.max_retries,
    })
}

/// One full placement attempt over a fresh copy of the skeleton.
fn attempt(skeleton: &WallSet, config: &PlacementConfig, rng: &mut impl Rng) -> Option<GoalLayout> {
    let mut walls = skeleton.clone();
    let mut goals = Vec::with_capacity(17);
    let mut corners = Vec::with_capacity(17);

    for quadrant in Quadrant::ALL {
        for color in GoalColor::SPECIFIC {
            let corner = place_one(quadrant, &mut walls, &corners, config.goal_tries, rng)?;
            goals.push(Goal::new(corner.position(), color));
            corners.push(corner);
        }
    }

    let quadrant = Quadrant::ALL[rng.gen_range(0..Quadrant::ALL.len())];
    let corner = place_one(quadrant, &mut walls, &corners, config.any_goal_tries, rng)?;
    goals.push(Goal::new(corner.position(), GoalColor::Any));
    corners.push(corner);

    Some(GoalLayout {
        walls,
        goals,
        corners,
    })
}

/// Search for one acceptable corner in `quadrant` and commit its walls.
fn place_one(
    quadrant: Quadrant,
    walls: &mut WallSet,
    corners: &[LShapeCorner],
    tries: u32,
    rng: &mut impl Rng,
) -> Option<LShapeCorner> {
    for _ in 0..tries {
        let position = quadrant.sample(rng);
        let orientation = random_orientation(rng);
        if !can_place(position, orientation, corners, Some(walls)) {
            continue;
        }
        let corner = LShapeCorner::new(position, orientation)?;
        add_corner(walls, &corner);
        return Some(corner);
    }
    None
}

/// Check the goal-set invariant: exactly 17 goals, four of each specific
/// color plus one any-robot goal, all positions distinct.
pub fn validate_goals(goals: &[Goal]) -> bool {
    if goals.len() != 17 {
        return false;
    }
    for color in GoalColor::SPECIFIC {
        if goals.iter().filter(|g| g.color == color).count() != 4 {
            return false;
        }
    }
    if goals.iter().filter(|g| g.color == GoalColor::Any).count() != 1 {
        return false;
    }
    for (i, a) in goals.iter().enumerate() {
        if goals[i + 1..].iter().any(|b| b.position == a.position) {
            return false;
        }
    }
    true
}
