use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use connect4_minimax::{board::Board, engine::Engine, Player};

fn bench_search_empty_board(c: &mut Criterion) {
    for &depth in [4, 6].iter() {
        c.bench_function(&format!("search_empty_depth_{}", depth), |b| {
            let mut board = Board::new();
            let mut engine = Engine::new(Player::One, depth).with_seed(0);
            b.iter(|| engine.best_move(black_box(&mut board)));
        });
    }
}

fn bench_search_mid_game(c: &mut Criterion) {
    c.bench_function("search_midgame_depth_6", |b| {
        let mut board = Board::from_moves("4453322516").expect("valid position");
        let mut engine = Engine::new(Player::One, 6).with_seed(0);
        b.iter(|| engine.best_move(black_box(&mut board)));
    });
}

fn bench_minimax_without_pruning(c: &mut Criterion) {
    c.bench_function("minimax_empty_depth_4", |b| {
        let mut board = Board::new();
        let mut engine = Engine::new(Player::One, 4)
            .with_seed(0)
            .with_pruning(false);
        b.iter(|| engine.best_move(black_box(&mut board)));
    });
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("self_play_depth_3", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut engines = [
                Engine::new(Player::One, 3).with_seed(1),
                Engine::new(Player::Two, 3).with_seed(2),
            ];
            let mut to_move = Player::One;
            while let Some(chosen) = engines[to_move.index()].best_move(&mut board) {
                board.place(chosen.column, to_move);
                to_move = to_move.opponent();
            }
            board.state()
        });
    });
}

criterion_group!(
    benches,
    bench_search_empty_board,
    bench_search_mid_game,
    bench_minimax_without_pruning,
    bench_self_play
);
criterion_main!(benches);
