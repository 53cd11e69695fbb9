//! Search benchmarks.
//!
//! Run with: `cargo bench`
//!
//! - Move generation and move application on 8x8
//! - Depth-limited alpha-beta from the 8x8 opening
//! - Exhaustive minimax vs alpha-beta on 4x4

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi_arena::games::reversi::{DiscWeightHeuristic, Reversi};
use reversi_arena::rules::RulesEngine;
use reversi_arena::search::{alphabeta, minimax, Horizon};

fn bench_move_generation(c: &mut Criterion) {
    let game = Reversi::default();
    let initial = game.initial_state();
    let action = game.actions(&initial)[0];

    c.bench_function("actions_8x8_opening", |b| {
        b.iter(|| black_box(game.actions(black_box(&initial))))
    });
    c.bench_function("state_after_move_8x8_opening", |b| {
        b.iter(|| black_box(game.state_after_move(black_box(&initial), action)))
    });
}

fn bench_heuristic_alphabeta(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic_alphabeta_8x8");
    let game = Reversi::default();
    let initial = game.initial_state();
    let heuristic = DiscWeightHeuristic::default();

    for depth in [1u32, 2, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let horizon = Horizon::Depth {
                    depth,
                    evaluator: &heuristic,
                };
                black_box(alphabeta::search(&game, &initial, horizon))
            });
        });
    }
    group.finish();
}

fn bench_exhaustive_4x4(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_4x4");
    group.sample_size(10);
    let game = Reversi::new(4).expect("4x4 is a valid board");
    let initial = game.initial_state();

    group.bench_function("minimax", |b| b.iter(|| black_box(minimax::search(&game, &initial))));
    group.bench_function("alphabeta", |b| {
        b.iter(|| black_box(alphabeta::search(&game, &initial, Horizon::Exhaustive)))
    });
    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_heuristic_alphabeta, bench_exhaustive_4x4);
criterion_main!(benches);
