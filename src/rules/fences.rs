//! Fence placement: orientation mapping, per-player budgets, and the
//! all-or-nothing placement routine.
//!
//! A fence occupies a single edge of a single cell. Placements may touch or
//! cross other fences freely; only an exact duplicate edge is rejected.

use serde::{Deserialize, Serialize};

use crate::board::{Board, WallEdge};
use crate::core::{Player, PlayerPair, Position};

use super::RuleViolation;

/// Number of fences each player holds at the start of a session.
pub const FENCES_PER_PLAYER: u8 = 10;

/// Requested orientation of a fence.
///
/// A horizontal fence occupies the north edge of the target cell; a
/// vertical fence occupies its west edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FenceOrientation {
    Horizontal,
    Vertical,
}

impl FenceOrientation {
    /// The cell edge this orientation occupies.
    #[must_use]
    pub const fn edge(self) -> WallEdge {
        match self {
            FenceOrientation::Horizontal => WallEdge::North,
            FenceOrientation::Vertical => WallEdge::West,
        }
    }
}

impl std::fmt::Display for FenceOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FenceOrientation::Horizontal => write!(f, "horizontal"),
            FenceOrientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Remaining fence counts for both players.
///
/// Counts start at [`FENCES_PER_PLAYER`] and only ever decrease, with a
/// floor of zero. A placement consults and decrements the acting player's
/// own counter, never the opponent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FenceReserve {
    remaining: PlayerPair<u8>,
}

impl FenceReserve {
    /// Create a reserve with the full allotment for both players.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: PlayerPair::with_value(FENCES_PER_PLAYER),
        }
    }

    /// Fences the given player may still place.
    #[must_use]
    pub fn remaining(&self, player: Player) -> u8 {
        self.remaining[player]
    }

    fn spend(&mut self, player: Player) {
        self.remaining[player] -= 1;
    }
}

impl Default for FenceReserve {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate and apply a fence placement in one step.
///
/// Checks run before any mutation: the acting player must have a fence left
/// and the requested edge must be free. On success the wall flag is raised
/// and the player's reserve drops by one.
///
/// # Errors
///
/// [`RuleViolation::NoFencesRemaining`] or
/// [`RuleViolation::FenceAlreadyPlaced`]; the board and the reserve are
/// untouched on either.
pub fn place(
    board: &mut Board,
    reserve: &mut FenceReserve,
    player: Player,
    pos: Position,
    orientation: FenceOrientation,
) -> Result<(), RuleViolation> {
    if reserve.remaining(player) == 0 {
        return Err(RuleViolation::NoFencesRemaining);
    }
    if board.has_wall(pos, orientation.edge()) {
        return Err(RuleViolation::FenceAlreadyPlaced);
    }
    board.set_wall(pos, orientation.edge());
    reserve.spend(player);
    Ok(())
}
