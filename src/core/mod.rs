//! Core identity types: players, coordinates, directions.
//!
//! These are the building blocks shared by every other module; none of them
//! carries any rule knowledge.

pub mod player;
pub mod position;

pub use player::{Player, PlayerPair};
pub use position::{Direction, Position, BOARD_SIZE};
