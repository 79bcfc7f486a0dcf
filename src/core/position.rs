//! Grid coordinates and movement directions.

use serde::{Deserialize, Serialize};

/// Width and height of the square board, in cells.
pub const BOARD_SIZE: u8 = 9;

/// A (row, col) coordinate on the 9x9 grid.
///
/// Row 0 is player one's home edge; row 8 is player two's. Coordinates off
/// the grid are representable so that callers can submit any request;
/// [`Position::in_bounds`] is the gate every rule check applies before the
/// board is indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position. No bounds check is applied here.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Get the row coordinate.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Get the column coordinate.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// True iff both coordinates lie on the grid.
    ///
    /// ```
    /// use quoridor_core::Position;
    ///
    /// assert!(Position::new(0, 0).in_bounds());
    /// assert!(Position::new(8, 8).in_bounds());
    /// assert!(!Position::new(9, 4).in_bounds());
    /// ```
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The adjacent position one cell over in `dir`, or `None` at the board
    /// edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::South => self
                .row
                .checked_add(1)
                .filter(|&row| row < BOARD_SIZE)
                .map(|row| Self::new(row, self.col)),
            Direction::West => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::East => self
                .col
                .checked_add(1)
                .filter(|&col| col < BOARD_SIZE)
                .map(|col| Self::new(self.row, col)),
        }
    }

    /// The direction from `self` to an orthogonally adjacent position.
    ///
    /// Returns `None` when `other` is not exactly one cell away.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&dir| self.step(dir) == Some(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
///
/// North points toward row 0, south toward row 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The two directions perpendicular to `self`.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::West | Direction::East => [Direction::North, Direction::South],
        }
    }
}
