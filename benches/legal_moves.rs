//! Benchmarks for move classification and enumeration on a mid-game board.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quoridor_core::{rules, Board, Occupant, Player, Position, WallEdge};

fn midgame_board() -> Board {
    let mut board = Board::new();
    board.set_occupant(Position::new(4, 4), Occupant::Pawn(Player::One));
    board.set_occupant(Position::new(5, 4), Occupant::Pawn(Player::Two));
    for (row, col, edge) in [
        (2, 2, WallEdge::North),
        (2, 3, WallEdge::North),
        (6, 6, WallEdge::West),
        (3, 7, WallEdge::North),
        (7, 2, WallEdge::West),
        (5, 1, WallEdge::North),
    ] {
        board.set_wall(Position::new(row, col), edge);
    }
    board
}

fn bench_legal_destinations(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("legal_destinations", |b| {
        b.iter(|| rules::legal_destinations(black_box(&board), Player::One, Position::new(4, 4)))
    });
}

fn bench_classify_jump(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("classify_straight_jump", |b| {
        b.iter(|| {
            rules::classify(
                black_box(&board),
                Player::One,
                Position::new(4, 4),
                Position::new(6, 4),
            )
        })
    });
}

criterion_group!(benches, bench_legal_destinations, bench_classify_jump);
criterion_main!(benches);
