//! Grid positions and movement directions.

use std::fmt;

/// Side length of the board. The playing field is `BOARD_SIZE × BOARD_SIZE`
/// cells, addressed `(x, y)` with `(0, 0)` in the top-left corner and `y`
/// growing downwards.
pub const BOARD_SIZE: u8 = 16;

/// A cell on the board.
///
/// Always in bounds: both coordinates lie in `[0, BOARD_SIZE)`. The only
/// constructors are the checked [`Position::new`] and the total
/// [`Position::from_index`], so no code downstream ever needs to re-check
/// ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position, or `None` if either coordinate is out of range.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Create a position from a flat cell index in row-major order.
    ///
    /// Total over `u8`: the board has exactly 256 cells, so every index
    /// maps to a valid cell. This makes uniform cell sampling a single
    /// `u8` draw.
    pub const fn from_index(index: u8) -> Self {
        Self {
            x: index % BOARD_SIZE,
            y: index / BOARD_SIZE,
        }
    }

    /// Column, in `[0, BOARD_SIZE)`.
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row, in `[0, BOARD_SIZE)`.
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The adjacent cell one step in `direction`, or `None` if that step
    /// would leave the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Chebyshev (chessboard) distance to `other`: the maximum of the
    /// per-axis absolute differences. Two cells within distance 1 share an
    /// edge or a corner.
    pub fn chebyshev(self, other: Self) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four cardinal directions a robot can slide in.
///
/// `Up` decreases `y`, `Down` increases it; `Left` decreases `x`,
/// `Right` increases it.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit offset of one step in this direction.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction pointing the opposite way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Position::new(16, 0).is_none());
        assert!(Position::new(0, 16).is_none());
        assert!(Position::new(255, 255).is_none());
        assert!(Position::new(15, 15).is_some());
    }

    #[test]
    fn from_index_is_row_major() {
        assert_eq!(Position::from_index(0), p(0, 0));
        assert_eq!(Position::from_index(17), p(1, 1));
        assert_eq!(Position::from_index(255), p(15, 15));
    }

    #[test]
    fn step_interior() {
        assert_eq!(p(5, 5).step(Direction::Up), Some(p(5, 4)));
        assert_eq!(p(5, 5).step(Direction::Down), Some(p(5, 6)));
        assert_eq!(p(5, 5).step(Direction::Left), Some(p(4, 5)));
        assert_eq!(p(5, 5).step(Direction::Right), Some(p(6, 5)));
    }

    #[test]
    fn step_off_board_is_none() {
        assert_eq!(p(0, 0).step(Direction::Up), None);
        assert_eq!(p(0, 0).step(Direction::Left), None);
        assert_eq!(p(15, 15).step(Direction::Down), None);
        assert_eq!(p(15, 15).step(Direction::Right), None);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(p(3, 3).chebyshev(p(3, 3)), 0);
        assert_eq!(p(3, 3).chebyshev(p(4, 4)), 1);
        assert_eq!(p(3, 3).chebyshev(p(3, 9)), 6);
        assert_eq!(p(1, 1).chebyshev(p(14, 2)), 13);
    }

    #[test]
    fn opposite_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    proptest! {
        #[test]
        fn from_index_round_trips(index in 0u8..) {
            let pos = Position::from_index(index);
            prop_assert_eq!(pos.y() as usize * BOARD_SIZE as usize + pos.x() as usize, index as usize);
        }

        #[test]
        fn step_stays_in_bounds(index in 0u8.., dir_idx in 0usize..4) {
            let pos = Position::from_index(index);
            if let Some(next) = pos.step(Direction::ALL[dir_idx]) {
                prop_assert!(next.x() < BOARD_SIZE);
                prop_assert!(next.y() < BOARD_SIZE);
                prop_assert_eq!(pos.chebyshev(next), 1);
            }
        }
    }
}
