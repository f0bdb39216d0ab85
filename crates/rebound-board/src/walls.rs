//! Wall storage and the wall-blocking query.
//!
//! Walls live on cell edges, not in cells. Two parallel structures cover
//! the board: `horizontal[row]` is the set of columns with a wall along
//! the *bottom* edge of that row's cells, and `vertical[col]` is the set
//! of rows with a wall along the *right* edge of that column's cells.
//! [`IndexSet`] keeps entries unique and iteration order deterministic.
//!
//! Once a puzzle's `WallSet` is finalized it is immutable for the rest of
//! the game; mutation happens only during generation.

use indexmap::IndexSet;
use rebound_core::{Direction, Position, BOARD_SIZE};

/// One wall segment, the length of a single cell edge.
///
/// Two segments overlap exactly when they are equal: same axis, same
/// `(row, col)` index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSegment {
    /// A wall along the bottom edge of cell `(col, row)`.
    Horizontal {
        /// Row index of the cell above the wall.
        row: u8,
        /// Column of the cell above the wall.
        col: u8,
    },
    /// A wall along the right edge of cell `(col, row)`.
    Vertical {
        /// Column index of the cell left of the wall.
        col: u8,
        /// Row of the cell left of the wall.
        row: u8,
    },
}

impl WallSegment {
    /// The segment's two endpoints on the unit lattice, where lattice
    /// point `(x, y)` is the top-left corner of cell `(x, y)`.
    fn endpoints(self) -> [(i16, i16); 2] {
        match self {
            WallSegment::Horizontal { row, col } => {
                let (c, r) = (col as i16, row as i16);
                [(c, r + 1), (c + 1, r + 1)]
            }
            WallSegment::Vertical { col, row } => {
                let (c, r) = (col as i16, row as i16);
                [(c + 1, r), (c + 1, r + 1)]
            }
        }
    }

    /// `true` if the two segments touch, meaning they share a lattice
    /// endpoint: collinear continuation, a perpendicular join, or an
    /// L-corner meeting at a point. Identical segments trivially touch;
    /// segments a full cell apart never do.
    pub fn adjacent_to(self, other: WallSegment) -> bool {
        let theirs = other.endpoints();
        self.endpoints().into_iter().any(|p| theirs.contains(&p))
    }
}

/// The wall between `position` and its neighbor one step in `direction`,
/// or `None` if that neighbor would be off the board (the outer boundary
/// is not represented as segments).
pub fn wall_between(position: Position, direction: Direction) -> Option<WallSegment> {
    position.step(direction)?;
    let (x, y) = (position.x(), position.y());
    Some(match direction {
        Direction::Up => WallSegment::Horizontal { row: y - 1, col: x },
        Direction::Down => WallSegment::Horizontal { row: y, col: x },
        Direction::Left => WallSegment::Vertical { col: x - 1, row: y },
        Direction::Right => WallSegment::Vertical { col: x, row: y },
    })
}

/// All interior walls of one board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallSet {
    horizontal: [IndexSet<u8>; BOARD_SIZE as usize],
    vertical: [IndexSet<u8>; BOARD_SIZE as usize],
}

impl WallSet {
    /// An empty wall grid: sixteen empty row and column sets each.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a segment. Returns `false` if it was already present.
    ///
    /// `WallSegment` fields are unchecked, so a segment may name indices
    /// past the board edge; such a segment borders no cell pair and is
    /// ignored (returns `false`).
    pub fn insert(&mut self, segment: WallSegment) -> bool {
        match segment {
            WallSegment::Horizontal { row, col } if row < BOARD_SIZE && col < BOARD_SIZE => {
                self.horizontal[row as usize].insert(col)
            }
            WallSegment::Vertical { col, row } if col < BOARD_SIZE && row < BOARD_SIZE => {
                self.vertical[col as usize].insert(row)
            }
            _ => false,
        }
    }

    /// `true` if the segment is present. Off-board segments are never
    /// stored, so they always report `false`.
    pub fn contains(&self, segment: WallSegment) -> bool {
        match segment {
            WallSegment::Horizontal { row, col } if row < BOARD_SIZE && col < BOARD_SIZE => {
                self.horizontal[row as usize].contains(&col)
            }
            WallSegment::Vertical { col, row } if col < BOARD_SIZE && row < BOARD_SIZE => {
                self.vertical[col as usize].contains(&row)
            }
            _ => false,
        }
    }

    /// Whether a wall blocks movement one step in `direction` from
    /// `position`.
    ///
    /// Pure query with no failure modes: stepping off the board from an
    /// edge cell reports "no wall" — the simulator's own boundary check is
    /// responsible for stopping there.
    pub fn is_blocking(&self, position: Position, direction: Direction) -> bool {
        match wall_between(position, direction) {
            Some(segment) => self.contains(segment),
            None => false,
        }
    }

    /// Iterate every stored segment, horizontal rows first, in insertion
    /// order within each row/column set.
    pub fn segments(&self) -> impl Iterator<Item = WallSegment> + '_ {
        let horizontal = self.horizontal.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .map(move |&col| WallSegment::Horizontal { row: row as u8, col })
        });
        let vertical = self.vertical.iter().enumerate().flat_map(|(col, rows)| {
            rows.iter()
                .map(move |&row| WallSegment::Vertical { col: col as u8, row })
        });
        horizontal.chain(vertical)
    }

    /// Total number of stored segments.
    pub fn len(&self) -> usize {
        let h: usize = self.horizontal.iter().map(IndexSet::len).sum();
        let v: usize = self.vertical.iter().map(IndexSet::len).sum();
        h + v
    }

    /// `true` if no segments are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if any stored segment touches `segment` (see
    /// [`WallSegment::adjacent_to`]).
    pub fn any_adjacent(&self, segment: WallSegment) -> bool {
        self.segments().any(|s| s.adjacent_to(segment))
    }
}
