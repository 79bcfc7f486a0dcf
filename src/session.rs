//! Game session: turn order, action application, and win detection.
//!
//! [`GameSession`] owns the entire mutable state of one game and exposes the
//! two mutating operations, [`GameSession::move_pawn`] and
//! [`GameSession::place_fence`]. Every precondition is checked before any
//! field changes, so a rejected call leaves the session exactly as it was.
//!
//! Sessions are single-threaded and turn-based: one mutable aggregate, one
//! call at a time. A host that needs concurrent access serializes calls
//! externally.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::board::{Board, Occupant};
use crate::core::{Player, PlayerPair, Position};
use crate::rules::{self, FenceOrientation, FenceReserve, PawnMove, RuleViolation};

/// Progress of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves and placements are still accepted.
    InProgress,
    /// The given player reached the far edge. Terminal: every later
    /// mutating call is rejected.
    Won(Player),
}

impl GameStatus {
    /// Whether the session has been decided.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

/// A successfully applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A pawn relocation.
    Move {
        from: Position,
        to: Position,
        kind: PawnMove,
    },
    /// A fence placement.
    Fence {
        pos: Position,
        orientation: FenceOrientation,
    },
}

/// History entry: one applied action with its turn number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// 1-based turn number.
    pub turn: u32,
    /// The player who acted.
    pub player: Player,
    /// What they did.
    pub action: Action,
}

/// A complete two-player game.
///
/// ## Example
///
/// ```
/// use quoridor_core::{FenceOrientation, GameSession, Player, Position};
///
/// let mut game = GameSession::new();
///
/// assert!(game.move_pawn(Player::One, Position::new(1, 4)));
/// assert!(game.place_fence(Player::Two, FenceOrientation::Horizontal, Position::new(2, 4)));
///
/// assert_eq!(game.fences_remaining(Player::Two), 9);
/// assert_eq!(game.to_move(), Player::One);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    pawns: PlayerPair<Position>,
    fences: FenceReserve,
    to_move: Player,
    status: GameStatus,
    history: Vec<ActionRecord>,
}

impl GameSession {
    /// Create a fresh session: pawns on their home cells, ten fences each,
    /// player one to move.
    #[must_use]
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            pawns: PlayerPair::new(Board::start_of(Player::One), Board::start_of(Player::Two)),
            fences: FenceReserve::new(),
            to_move: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    // === Queries ===

    /// The board, for inspection and rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current progress of the session.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the given player has won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.status.winner() == Some(player)
    }

    /// Where the given player's pawn stands.
    #[must_use]
    pub fn pawn_position(&self, player: Player) -> Position {
        self.pawns[player]
    }

    /// Fences the given player may still place.
    #[must_use]
    pub fn fences_remaining(&self, player: Player) -> u8 {
        self.fences.remaining(player)
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Every cell the player's pawn could legally move to right now.
    ///
    /// Turn order and game status are ignored; this is a pure query for
    /// renderers and move pickers.
    #[must_use]
    pub fn legal_destinations(&self, player: Player) -> SmallVec<[Position; 5]> {
        rules::legal_destinations(&self.board, player, self.pawns[player])
    }

    // === Mutating operations ===

    /// Move the player's pawn, reporting only success or failure.
    ///
    /// See [`GameSession::try_move_pawn`] for the rejection reason.
    pub fn move_pawn(&mut self, player: Player, dest: Position) -> bool {
        self.try_move_pawn(player, dest).is_ok()
    }

    /// Move the player's pawn to `dest`.
    ///
    /// On success the applied move category is returned, the win condition
    /// is evaluated, and the turn passes to the opponent. A winning move
    /// itself succeeds; everything after it is rejected.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::GameOver`], [`RuleViolation::OutOfTurn`],
    /// [`RuleViolation::OutOfBounds`], or [`RuleViolation::IllegalMove`],
    /// checked in that order. The session is unchanged on every error.
    #[instrument(skip(self), fields(player = %player, dest = %dest))]
    pub fn try_move_pawn(
        &mut self,
        player: Player,
        dest: Position,
    ) -> Result<PawnMove, RuleViolation> {
        self.gate(player, dest)?;

        let src = self.pawns[player];
        let kind =
            rules::classify(&self.board, player, src, dest).ok_or(RuleViolation::IllegalMove)?;

        self.board.set_occupant(src, Occupant::Empty);
        self.board.set_occupant(dest, Occupant::Pawn(player));
        self.pawns[player] = dest;

        if dest.row() == player.goal_row() {
            self.status = GameStatus::Won(player);
        }

        self.record(player, Action::Move { from: src, to: dest, kind });
        self.to_move = self.to_move.opponent();
        Ok(kind)
    }

    /// Place a fence, reporting only success or failure.
    ///
    /// See [`GameSession::try_place_fence`] for the rejection reason.
    pub fn place_fence(
        &mut self,
        player: Player,
        orientation: FenceOrientation,
        pos: Position,
    ) -> bool {
        self.try_place_fence(player, orientation, pos).is_ok()
    }

    /// Place a fence on the given edge of the cell at `pos`.
    ///
    /// On success the acting player's reserve drops by one and the turn
    /// passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::GameOver`], [`RuleViolation::OutOfTurn`],
    /// [`RuleViolation::OutOfBounds`], [`RuleViolation::NoFencesRemaining`],
    /// or [`RuleViolation::FenceAlreadyPlaced`], checked in that order. The
    /// session is unchanged on every error.
    #[instrument(skip(self), fields(player = %player, orientation = %orientation, pos = %pos))]
    pub fn try_place_fence(
        &mut self,
        player: Player,
        orientation: FenceOrientation,
        pos: Position,
    ) -> Result<(), RuleViolation> {
        self.gate(player, pos)?;
        rules::fences::place(&mut self.board, &mut self.fences, player, pos, orientation)?;

        self.record(player, Action::Fence { pos, orientation });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Checks shared by both operations, in rejection-priority order.
    fn gate(&self, player: Player, target: Position) -> Result<(), RuleViolation> {
        if self.status.is_over() {
            return Err(RuleViolation::GameOver);
        }
        if player != self.to_move {
            return Err(RuleViolation::OutOfTurn);
        }
        if !target.in_bounds() {
            return Err(RuleViolation::OutOfBounds);
        }
        Ok(())
    }

    fn record(&mut self, player: Player, action: Action) {
        let turn = self.history.len() as u32 + 1;
        self.history.push(ActionRecord { turn, player, action });
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
