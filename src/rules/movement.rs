//! Pawn movement: orthogonal steps, straight jumps, diagonal jumps.
//!
//! A candidate move is tested against the three categories in a fixed
//! precedence order; the first category whose geometry matches decides the
//! move. The geometries are disjoint (one cell away, two cells in a line,
//! one cell diagonal), so at most one category can ever apply to a given
//! destination.
//!
//! ## Jump rules
//!
//! With the two pawns face to face, the mover may leap straight over the
//! opponent when no wall blocks either half of the leap. When the far half
//! is blocked, whether by a wall behind the opponent or by the board edge,
//! the leap bends sideways instead: either cell perpendicular off the
//! opponent is reachable, provided no wall separates it from the opponent's
//! cell. A jump never triggers unless the adjacent pawn belongs to the
//! opponent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Occupant};
use crate::core::{Direction, Player, Position};

/// Category of a legal pawn move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PawnMove {
    /// One cell to an orthogonally adjacent, unobstructed square.
    Step,
    /// Two cells in a line, leaping the opponent's pawn.
    StraightJump,
    /// A sideways leap past the opponent when the straight jump is blocked.
    DiagonalJump,
}

/// Classify a candidate pawn move from `src` to `dest`.
///
/// `src` must hold the mover's pawn and `dest` must be in bounds; both are
/// the caller's responsibility. Returns `None` when no category makes the
/// move legal, including when `dest` is occupied.
#[must_use]
pub fn classify(board: &Board, mover: Player, src: Position, dest: Position) -> Option<PawnMove> {
    if !board.occupant_at(dest).is_empty() {
        return None;
    }

    // Orthogonal step: adjacency picks the category, the shared edge
    // decides legality.
    if let Some(dir) = src.direction_to(dest) {
        return (!board.crossing_blocked(src, dir)).then_some(PawnMove::Step);
    }

    let opponent = Occupant::Pawn(mover.opponent());
    for dir in Direction::ALL {
        let Some(over) = src.step(dir) else {
            continue;
        };
        if board.occupant_at(over) != opponent || board.crossing_blocked(src, dir) {
            continue;
        }

        // Straight jump: two cells ahead with both half-edges open.
        if over.step(dir) == Some(dest) {
            return (!board.crossing_blocked(over, dir)).then_some(PawnMove::StraightJump);
        }

        // Diagonal jump: only once the cell beyond the opponent is walled
        // off or lies past the board edge.
        if board.crossing_blocked(over, dir) {
            for side in dir.perpendicular() {
                if over.step(side) == Some(dest) && !board.crossing_blocked(over, side) {
                    return Some(PawnMove::DiagonalJump);
                }
            }
        }
    }

    None
}

/// Every destination the mover's pawn can legally reach from `src`.
///
/// Agrees with [`classify`] on every in-bounds destination. At most five
/// cells are reachable: three open steps plus two diagonal leaps around an
/// adjacent opponent.
#[must_use]
pub fn legal_destinations(
    board: &Board,
    mover: Player,
    src: Position,
) -> SmallVec<[Position; 5]> {
    let mut out = SmallVec::new();

    for dir in Direction::ALL {
        let Some(next) = src.step(dir) else {
            continue;
        };
        if board.crossing_blocked(src, dir) {
            continue;
        }
        match board.occupant_at(next) {
            Occupant::Empty => out.push(next),
            Occupant::Pawn(holder) if holder == mover.opponent() => {
                if board.crossing_blocked(next, dir) {
                    for side in dir.perpendicular() {
                        if let Some(diag) = next.step(side) {
                            if !board.crossing_blocked(next, side)
                                && board.occupant_at(diag).is_empty()
                            {
                                out.push(diag);
                            }
                        }
                    }
                } else if let Some(landing) = next.step(dir) {
                    if board.occupant_at(landing).is_empty() {
                        out.push(landing);
                    }
                }
            }
            Occupant::Pawn(_) => {}
        }
    }

    out
}
