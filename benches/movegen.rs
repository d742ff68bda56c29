use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wildfire_checkers::core::{Board, BoardConfig, GameRng, Player, RulesConfig};
use wildfire_checkers::rules::legal_moves_for;
use wildfire_checkers::wildfire::{propagate_fire, start_fire};

fn bench_movegen(c: &mut Criterion) {
    let board = Board::standard(&BoardConfig::default()).expect("standard board");
    let rules = RulesConfig::default();

    c.bench_function("legal_moves_for opening", |b| {
        b.iter(|| legal_moves_for(black_box(&board), Player::One, &rules))
    });
}

fn bench_wildfire(c: &mut Criterion) {
    let board = Board::standard(&BoardConfig::default()).expect("standard board");
    let mut rng = GameRng::new(42);
    let lit = start_fire(&board, 0.6, 0.5, 3, &mut rng).expect("valid parameters").board;

    c.bench_function("propagate_fire 8x8", |b| b.iter(|| propagate_fire(black_box(&lit))));
}

criterion_group!(benches, bench_movegen, bench_wildfire);
criterion_main!(benches);
