//! Board grid: cell occupancy and wall flags.
//!
//! ## Representation
//!
//! The board is a 9x9 array of [`Cell`]s. Each cell records its occupant and
//! two wall flags: `wall_north` blocks crossing to the cell one row up,
//! `wall_west` blocks crossing to the cell one column left. Every edge
//! between two adjacent cells is owned by exactly one flag, so a single wall
//! blocks movement in both directions across that edge.
//!
//! Wall flags are monotonic: once raised they are never cleared.
//!
//! The board holds no rule knowledge. Legality lives in [`crate::rules`];
//! this module only answers "what is where" and performs the requested
//! mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Direction, Player, Position, BOARD_SIZE};

/// Contents of a cell's occupant slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// No pawn on this cell.
    #[default]
    Empty,
    /// The given player's pawn.
    Pawn(Player),
}

impl Occupant {
    /// True iff no pawn occupies the slot.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// The two cell edges a wall segment can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallEdge {
    /// The edge shared with the cell one row up.
    North,
    /// The edge shared with the cell one column left.
    West,
}

/// A single cell: one occupant slot plus two wall flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    occupant: Occupant,
    wall_north: bool,
    wall_west: bool,
}

impl Cell {
    /// The occupant slot.
    #[must_use]
    pub const fn occupant(self) -> Occupant {
        self.occupant
    }

    /// Whether a wall sits on the north edge.
    #[must_use]
    pub const fn wall_north(self) -> bool {
        self.wall_north
    }

    /// Whether a wall sits on the west edge.
    #[must_use]
    pub const fn wall_west(self) -> bool {
        self.wall_west
    }
}

/// The 9x9 playing grid.
///
/// Accessors take a [`Position`] and index the grid directly; callers gate
/// on [`Position::in_bounds`] first. Out-of-bounds access panics, which no
/// engine path reaches past the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Create an empty board: no pawns, no walls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Create a board with both pawns on their starting cells.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for player in Player::BOTH {
            board.set_occupant(Self::start_of(player), Occupant::Pawn(player));
        }
        board
    }

    /// The starting cell for a player's pawn: the middle of its home edge.
    ///
    /// Player one starts at (0, 4), player two at (8, 4).
    #[must_use]
    pub const fn start_of(player: Player) -> Position {
        Position::new(player.opponent().goal_row(), BOARD_SIZE / 2)
    }

    fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row() as usize][pos.col() as usize]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// A copy of the cell at `pos`.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Cell {
        *self.cell(pos)
    }

    /// The occupant of the cell at `pos`.
    #[must_use]
    pub fn occupant_at(&self, pos: Position) -> Occupant {
        self.cell(pos).occupant
    }

    /// Place `occupant` in the slot of the cell at `pos`.
    pub fn set_occupant(&mut self, pos: Position, occupant: Occupant) {
        self.cell_mut(pos).occupant = occupant;
    }

    /// Whether a wall segment sits on the given edge of the cell at `pos`.
    #[must_use]
    pub fn has_wall(&self, pos: Position, edge: WallEdge) -> bool {
        let cell = self.cell(pos);
        match edge {
            WallEdge::North => cell.wall_north,
            WallEdge::West => cell.wall_west,
        }
    }

    /// Raise a wall segment on the given edge of the cell at `pos`.
    ///
    /// Walls are never removed; there is no clearing counterpart.
    pub fn set_wall(&mut self, pos: Position, edge: WallEdge) {
        let cell = self.cell_mut(pos);
        match edge {
            WallEdge::North => cell.wall_north = true,
            WallEdge::West => cell.wall_west = true,
        }
    }

    /// Whether moving from `from` one cell in `dir` is obstructed, either by
    /// a wall on the shared edge or by the board edge itself.
    #[must_use]
    pub fn crossing_blocked(&self, from: Position, dir: Direction) -> bool {
        match from.step(dir) {
            None => true,
            Some(to) => match dir {
                Direction::North => self.has_wall(from, WallEdge::North),
                Direction::West => self.has_wall(from, WallEdge::West),
                Direction::South => self.has_wall(to, WallEdge::North),
                Direction::East => self.has_wall(to, WallEdge::West),
            },
        }
    }

    /// Locate a player's pawn by scanning the grid.
    ///
    /// Returns `None` only on hand-built boards where the pawn was never
    /// placed; session-managed boards always hold both pawns.
    #[must_use]
    pub fn pawn_position(&self, player: Player) -> Option<Position> {
        self.positions()
            .find(|&pos| self.occupant_at(pos) == Occupant::Pawn(player))
    }

    /// Iterate over every position on the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the grid top (row 0) to bottom: pawns as `1`/`2`, empty cells
    /// as `.`, walls as `|` between columns and `-` between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                for col in 0..BOARD_SIZE {
                    if col > 0 {
                        f.write_str(" ")?;
                    }
                    let below = Position::new(row, col);
                    f.write_str(if self.has_wall(below, WallEdge::North) {
                        "-"
                    } else {
                        " "
                    })?;
                }
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                if col > 0 {
                    f.write_str(if self.has_wall(pos, WallEdge::West) {
                        "|"
                    } else {
                        " "
                    })?;
                }
                f.write_str(match self.occupant_at(pos) {
                    Occupant::Empty => ".",
                    Occupant::Pawn(Player::One) => "1",
                    Occupant::Pawn(Player::Two) => "2",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
