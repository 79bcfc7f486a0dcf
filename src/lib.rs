//! # quoridor-core
//!
//! A rules engine for the two-player board game Quoridor.
//!
//! Each player's pawn races toward the opposite edge of a 9x9 grid; on any
//! turn a player may instead spend one of ten fences to wall off an edge
//! between two cells. The engine validates every action against the
//! movement and placement rules, applies legal ones, and detects the win.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every precondition for an action is
//!    checked before any state changes, so a rejected call has no side
//!    effects at all.
//!
//! 2. **One rule set, two players**: movement is parameterized by direction
//!    and goal row instead of being written out once per player, so the two
//!    sides cannot drift apart.
//!
//! 3. **Library-shaped**: no I/O, no threads, no front end. Callers drive
//!    the session and render the state however they like.
//!
//! ## Modules
//!
//! - `core`: player identity, grid coordinates, directions
//! - `board`: the 9x9 grid of occupants and wall flags
//! - `rules`: pure validation of pawn moves and fence placements
//! - `session`: turn order, action application, win detection
//!
//! ## Quick Start
//!
//! ```
//! use quoridor_core::{GameSession, Player, Position};
//!
//! let mut game = GameSession::new();
//! assert_eq!(game.to_move(), Player::One);
//!
//! // Player one steps toward the far edge.
//! assert!(game.move_pawn(Player::One, Position::new(1, 4)));
//! assert_eq!(game.to_move(), Player::Two);
//!
//! // Acting out of turn is rejected without changing anything.
//! assert!(!game.move_pawn(Player::One, Position::new(2, 4)));
//! assert!(!game.is_winner(Player::One));
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

pub use crate::board::{Board, Cell, Occupant, WallEdge};
pub use crate::core::{Direction, Player, PlayerPair, Position, BOARD_SIZE};
pub use crate::rules::{
    FenceOrientation, FenceReserve, PawnMove, RuleViolation, FENCES_PER_PLAYER,
};
pub use crate::session::{Action, ActionRecord, GameSession, GameStatus};
