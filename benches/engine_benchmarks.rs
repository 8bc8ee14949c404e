//! Benchmarks for move generation and game-state throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_session::board::{all_legal_moves, Square};
use chess_session::game::GameState;
use chess_session::opponent::RandomOpponent;

/// Italian game after 3...Nf6.
fn middlegame() -> GameState {
    let mut game = GameState::new();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        let mv = game.parse_move(text).expect("opening move is legal");
        game.apply_move(mv).expect("opening move applies");
    }
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = GameState::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut italian = middlegame();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| italian.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = GameState::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.all_legal_moves()))
    });

    let italian = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| {
            black_box(all_legal_moves(
                italian.board(),
                italian.side_to_move(),
                &italian.move_context(),
            ))
        })
    });

    group.bench_function("single_square", |b| {
        b.iter(|| black_box(italian.legal_moves(black_box(Square::E1))))
    });

    group.finish();
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_100_plies", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            let mut opponent = RandomOpponent::seeded(2024);
            for _ in 0..100 {
                let Some(mv) = opponent.choose_move(&game) else {
                    break;
                };
                let _ = game.apply_move(mv);
            }
            black_box(game.status())
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_random_game);
criterion_main!(benches);
