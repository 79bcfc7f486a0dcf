//! Rule validation: pawn movement categories and fence placement.
//!
//! Everything in this module is a pure function of the board (plus the
//! fence reserve); mutation happens in [`crate::session`], and in
//! [`fences::place`], only after every precondition has passed.

pub mod fences;
pub mod movement;

pub use fences::{FenceOrientation, FenceReserve, FENCES_PER_PLAYER};
pub use movement::{classify, legal_destinations, PawnMove};

/// Reasons a requested action is rejected.
///
/// Every rejection leaves the session untouched; the caller may simply
/// retry with different input. None of these is fatal to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    /// The game has already been decided.
    GameOver,
    /// The acting player is not the current mover.
    OutOfTurn,
    /// The target position lies outside the 9x9 grid.
    OutOfBounds,
    /// No movement category reaches the target cell.
    IllegalMove,
    /// The acting player has no fences left to place.
    NoFencesRemaining,
    /// A wall already occupies the requested edge.
    FenceAlreadyPlaced,
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::GameOver => write!(f, "the game has already been decided"),
            RuleViolation::OutOfTurn => write!(f, "it is not this player's turn"),
            RuleViolation::OutOfBounds => write!(f, "the target position is off the board"),
            RuleViolation::IllegalMove => write!(f, "no legal move reaches the target cell"),
            RuleViolation::NoFencesRemaining => write!(f, "no fences remaining"),
            RuleViolation::FenceAlreadyPlaced => {
                write!(f, "a wall already occupies the requested edge")
            }
        }
    }
}

impl std::error::Error for RuleViolation {}
