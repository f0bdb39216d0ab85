//! The fixed, non-randomized part of every board.
//!
//! Two steps run before goal placement: the permanently enclosed 2×2
//! center block, and eight short walls perpendicular to the outer edges,
//! two per quadrant. Together they are the immovable obstacles that goal
//! placement must keep its corners clear of.

use crate::walls::{WallSegment, WallSet};
use rand::Rng;
use rebound_core::Position;

/// The four permanently blocked center cells: (7,7), (8,7), (7,8), (8,8).
pub fn center_cells() -> [Position; 4] {
    [
        Position::from_index(7 * 16 + 7),
        Position::from_index(7 * 16 + 8),
        Position::from_index(8 * 16 + 7),
        Position::from_index(8 * 16 + 8),
    ]
}

/// Enclose the 2×2 center square as a unit: horizontal walls at row
/// indices 6 and 8 spanning columns 7–8, vertical walls at column indices
/// 6 and 8 spanning rows 7–8. Eight segments total; the four cells inside
/// can be neither entered nor left.
pub fn add_center_block(walls: &mut WallSet) {
    for col in [7u8, 8] {
        walls.insert(WallSegment::Horizontal { row: 6, col });
        walls.insert(WallSegment::Horizontal { row: 8, col });
    }
    for row in [7u8, 8] {
        walls.insert(WallSegment::Vertical { col: 6, row });
        walls.insert(WallSegment::Vertical { col: 8, row });
    }
}

/// Add the eight outer-edge walls, two per quadrant on its two
/// outward-facing sides.
///
/// Each wall is a single segment perpendicular to and touching one outer
/// edge, at a random index 1–6 from the quadrant's board corner (8–13
/// measured from the far corner), i.e. 2–7 cells in from the nearest
/// corner.
pub fn add_outer_edge_walls(walls: &mut WallSet, rng: &mut impl Rng) {
    // North-west: top edge and left edge.
    walls.insert(WallSegment::Vertical { col: rng.gen_range(1..=6), row: 0 });
    walls.insert(WallSegment::Horizontal { row: rng.gen_range(1..=6), col: 0 });
    // North-east: top edge and right edge.
    walls.insert(WallSegment::Vertical { col: rng.gen_range(8..=13), row: 0 });
    walls.insert(WallSegment::Horizontal { row: rng.gen_range(1..=6), col: 15 });
    // South-west: bottom edge and left edge.
    walls.insert(WallSegment::Vertical { col: rng.gen_range(1..=6), row: 15 });
    walls.insert(WallSegment::Horizontal { row: rng.gen_range(8..=13), col: 0 });
    // South-east: bottom edge and right edge.
    walls.insert(WallSegment::Vertical { col: rng.gen_range(8..=13), row: 15 });
    walls.insert(WallSegment::Horizontal { row: rng.gen_range(8..=13), col: 15 });
}

/// Build the complete skeleton: empty walls, center block, outer-edge
/// walls. Always exactly 16 segments.
pub fn build_skeleton(rng: &mut impl Rng) -> WallSet {
    let mut walls = WallSet::new();
    add_center_block(&mut walls);
    add_outer_edge_walls(&mut walls, rng);
    walls
}
