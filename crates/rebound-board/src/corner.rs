//! L-shaped wall corners anchored at goal cells.
//!
//! Every goal sits in the pocket of a two-segment wall corner. The corner
//! is the goal's only obstruction structure, so placement is checked in
//! layers: segment overlap, goal-to-goal separation, contact with fixed
//! board structure, and finally that the corner does not seal its own
//! goal cell shut. The checks short-circuit in that order.

use crate::walls::{wall_between, WallSegment, WallSet};
use rand::Rng;
use rebound_core::{Direction, Orientation, Position};

/// An L-shaped wall corner: a goal cell plus the orientation naming which
/// two of its edges carry walls.
///
/// Created in lockstep with its goal during placement and never mutated.
/// The two implied segments are precomputed at construction, so a corner
/// that exists is always fully on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LShapeCorner {
    position: Position,
    orientation: Orientation,
    segments: [WallSegment; 2],
}

/// The two cell edges walled by `orientation`.
const fn walled_sides(orientation: Orientation) -> [Direction; 2] {
    match orientation {
        Orientation::NorthWest => [Direction::Up, Direction::Left],
        Orientation::NorthEast => [Direction::Up, Direction::Right],
        Orientation::SouthWest => [Direction::Down, Direction::Left],
        Orientation::SouthEast => [Direction::Down, Direction::Right],
    }
}

impl LShapeCorner {
    /// Build a corner at `position`, or `None` if either wall segment
    /// would fall on the board boundary (positions on the outer ring
    /// cannot host a corner facing outwards).
    pub fn new(position: Position, orientation: Orientation) -> Option<Self> {
        let [a, b] = walled_sides(orientation);
        let segments = [wall_between(position, a)?, wall_between(position, b)?];
        Some(Self {
            position,
            orientation,
            segments,
        })
    }

    /// The goal cell this corner is anchored at.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Which two edges of the goal cell carry walls.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The two wall segments this corner contributes.
    pub fn segments(&self) -> [WallSegment; 2] {
        self.segments
    }

    /// The two directions a robot can still enter or leave the goal cell
    /// by (the sides opposite the corner's walls).
    pub fn open_sides(&self) -> [Direction; 2] {
        let [a, b] = walled_sides(self.orientation);
        [a.opposite(), b.opposite()]
    }
}

/// Whether a corner with this position and orientation may be placed.
///
/// Checks, short-circuiting on the first failure:
///
/// 1. the corner exists (both segments on the board) and neither segment
///    equals a segment of an already-placed corner;
/// 2. the position is not within a 3×3 box (Chebyshev distance ≤ 1) of
///    any existing corner's position;
/// 3. with `walls` supplied: neither segment touches a segment already on
///    the board (shares a lattice endpoint with one) — this keeps corners
///    off the center block, the outer-edge walls, and each other's walls;
/// 4. with `walls` supplied: the two sides opposite the corner's walls are
///    not both already walled, which would seal the goal cell and make it
///    unreachable by sliding.
pub fn can_place(
    position: Position,
    orientation: Orientation,
    existing: &[LShapeCorner],
    walls: Option<&WallSet>,
) -> bool {
    let Some(candidate) = LShapeCorner::new(position, orientation) else {
        return false;
    };

    let segments = candidate.segments();
    for corner in existing {
        if corner.segments().iter().any(|s| segments.contains(s)) {
            return false;
        }
    }

    if existing
        .iter()
        .any(|corner| corner.position().chebyshev(position) <= 1)
    {
        return false;
    }

    if let Some(walls) = walls {
        if segments.iter().any(|&s| walls.any_adjacent(s)) {
            return false;
        }

        if candidate
            .open_sides()
            .iter()
            .all(|&dir| walls.is_blocking(position, dir))
        {
            return false;
        }
    }

    true
}

/// Commit a corner's two segments into `walls` (deduplicated).
pub fn add_corner(walls: &mut WallSet, corner: &LShapeCorner) {
    for segment in corner.segments() {
        walls.insert(segment);
    }
}

/// Uniform random choice among the four orientations.
pub fn random_orientation(rng: &mut impl Rng) -> Orientation {
    Orientation::ALL[rng.gen_range(0..Orientation::ALL.len())]
}
