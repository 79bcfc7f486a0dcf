//! Property tests over randomized action sequences.
//!
//! Each sequence drives a fresh session through a mix of legal moves,
//! arbitrary (mostly illegal) moves, and fence placements, by the current
//! mover and by the opponent, checking after every request that the
//! session-wide invariants hold: strict turn alternation, exactly one pawn
//! per player, monotonic walls, budgets within [0, 10], no state change on
//! failure, and the terminal lock.

use proptest::prelude::*;
use quoridor_core::{
    rules, Board, FenceOrientation, GameSession, Occupant, Player, Position, WallEdge,
};

#[derive(Clone, Debug)]
enum Request {
    /// Pick one of the mover's currently legal destinations.
    LegalMove { out_of_turn: bool, pick: u8 },
    /// Aim at an arbitrary cell, on the board or just off it.
    RandomMove { out_of_turn: bool, row: u8, col: u8 },
    /// Place a fence at an arbitrary cell.
    Fence {
        out_of_turn: bool,
        vertical: bool,
        row: u8,
        col: u8,
    },
}

impl Request {
    fn out_of_turn(&self) -> bool {
        match *self {
            Request::LegalMove { out_of_turn, .. }
            | Request::RandomMove { out_of_turn, .. }
            | Request::Fence { out_of_turn, .. } => out_of_turn,
        }
    }
}

fn request_strategy() -> impl Strategy<Value = Request> {
    prop_oneof![
        3 => (any::<bool>(), any::<u8>())
            .prop_map(|(out_of_turn, pick)| Request::LegalMove { out_of_turn, pick }),
        1 => (any::<bool>(), 0u8..10, 0u8..10)
            .prop_map(|(out_of_turn, row, col)| Request::RandomMove { out_of_turn, row, col }),
        2 => (any::<bool>(), any::<bool>(), 0u8..10, 0u8..10).prop_map(
            |(out_of_turn, vertical, row, col)| Request::Fence {
                out_of_turn,
                vertical,
                row,
                col
            }
        ),
    ]
}

fn actor(game: &GameSession, out_of_turn: bool) -> Player {
    if out_of_turn {
        game.to_move().opponent()
    } else {
        game.to_move()
    }
}

fn apply(game: &mut GameSession, request: &Request) -> bool {
    match *request {
        Request::LegalMove { out_of_turn, pick } => {
            let player = actor(game, out_of_turn);
            let dests = rules::legal_destinations(
                game.board(),
                player,
                game.pawn_position(player),
            );
            let dest = if dests.is_empty() {
                Position::new(0, 0)
            } else {
                dests[pick as usize % dests.len()]
            };
            game.move_pawn(player, dest)
        }
        Request::RandomMove { out_of_turn, row, col } => {
            let player = actor(game, out_of_turn);
            game.move_pawn(player, Position::new(row, col))
        }
        Request::Fence {
            out_of_turn,
            vertical,
            row,
            col,
        } => {
            let player = actor(game, out_of_turn);
            let orientation = if vertical {
                FenceOrientation::Vertical
            } else {
                FenceOrientation::Horizontal
            };
            game.place_fence(player, orientation, Position::new(row, col))
        }
    }
}

/// One flag per cell edge, in a stable order.
fn wall_flags(game: &GameSession) -> Vec<bool> {
    game.board()
        .positions()
        .flat_map(|pos| {
            [
                game.board().has_wall(pos, WallEdge::North),
                game.board().has_wall(pos, WallEdge::West),
            ]
        })
        .collect()
}

proptest! {
    #[test]
    fn random_sequences_preserve_invariants(
        requests in prop::collection::vec(request_strategy(), 1..150)
    ) {
        let mut game = GameSession::new();

        for request in &requests {
            let before = game.clone();
            let walls_before = wall_flags(&game);

            let ok = apply(&mut game, request);

            // Out-of-turn requests never succeed; neither does anything
            // after the game is decided.
            if request.out_of_turn() || before.status().is_over() {
                prop_assert!(!ok);
            }

            if ok {
                // The turn passed to the opponent and one record was added.
                prop_assert_eq!(game.to_move(), before.to_move().opponent());
                prop_assert_eq!(game.history().len(), before.history().len() + 1);
            } else {
                // Failure is side-effect free.
                prop_assert_eq!(&game, &before);
            }

            // Exactly one pawn per player, where the session says it is.
            for player in Player::BOTH {
                let cells: Vec<Position> = game
                    .board()
                    .positions()
                    .filter(|&pos| game.board().occupant_at(pos) == Occupant::Pawn(player))
                    .collect();
                prop_assert_eq!(cells, vec![game.pawn_position(player)]);
            }

            // Budgets stay in [0, 10] and never grow.
            for player in Player::BOTH {
                prop_assert!(game.fences_remaining(player) <= 10);
                prop_assert!(
                    game.fences_remaining(player) <= before.fences_remaining(player)
                );
            }

            // Walls only accumulate.
            for (was, is) in walls_before.iter().zip(wall_flags(&game)) {
                prop_assert!(!*was || is);
            }

            // A decided game stays decided, with the same winner.
            if let Some(winner) = before.status().winner() {
                prop_assert_eq!(game.status().winner(), Some(winner));
            }
        }
    }

    #[test]
    fn classification_agrees_with_enumeration(
        walls in prop::collection::vec((0u8..9, 0u8..9, any::<bool>()), 0..30),
        one_idx in 0u8..81,
        two_idx in 0u8..81,
    ) {
        prop_assume!(one_idx != two_idx);

        let one = Position::new(one_idx / 9, one_idx % 9);
        let two = Position::new(two_idx / 9, two_idx % 9);
        let mut board = Board::new();
        board.set_occupant(one, Occupant::Pawn(Player::One));
        board.set_occupant(two, Occupant::Pawn(Player::Two));
        for &(row, col, vertical) in &walls {
            let edge = if vertical { WallEdge::West } else { WallEdge::North };
            board.set_wall(Position::new(row, col), edge);
        }

        for (mover, src) in [(Player::One, one), (Player::Two, two)] {
            let dests = rules::legal_destinations(&board, mover, src);
            for dest in board.positions() {
                prop_assert_eq!(
                    rules::classify(&board, mover, src, dest).is_some(),
                    dests.contains(&dest),
                    "{} at {} disagrees about {}",
                    mover,
                    src,
                    dest
                );
            }
        }
    }
}
