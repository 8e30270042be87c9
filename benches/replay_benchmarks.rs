use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use push_engine::core::{
    apply_move, decode, deserialize_directions, replay, serialize_directions, undo, Direction, Level, MoveRules,
};

use rand::prelude::*;
use rand::SeedableRng;

const LEVEL: &str = "4000B0\n120000\n050000\n678900\nABCD30";

/// Plays random directions and keeps only the ones that applied, so the result always replays.
fn generate_random_walk(level: &Level, rules: &MoveRules, count: usize, seed: u64) -> Vec<Direction> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = level.initial_state();
    let mut directions = Vec::new();
    for _ in 0..count {
        let direction = Direction::MOVES[rng.random_range(0..Direction::MOVES.len())];
        let result = apply_move(&game, direction, rules);
        if result.applied {
            directions.push(direction);
            game = result.state;
        }
    }
    directions
}

fn bench_replay(c: &mut Criterion) {
    let level = decode(LEVEL).unwrap();
    let rules = MoveRules {
        freeze_on_exit: false,
        ..MoveRules::default()
    };
    let mut group = c.benchmark_group("replay");

    for walk_length in [10, 100, 1000] {
        let directions = generate_random_walk(&level, &rules, walk_length, 42);
        group.throughput(Throughput::Elements(directions.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("replay", walk_length),
            &directions,
            |b, directions| {
                b.iter(|| black_box(replay(black_box(&level), black_box(directions), &rules)));
            },
        );

        let encoded = serialize_directions(&directions);
        group.bench_with_input(
            BenchmarkId::new("decode_directions", walk_length),
            &encoded,
            |b, encoded| {
                b.iter(|| black_box(deserialize_directions(black_box(encoded))));
            },
        );

        let Ok(played) = replay(&level, &directions, &rules) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("undo_all", walk_length),
            &played,
            |b, played| {
                b.iter(|| {
                    let mut game = black_box(played).clone();
                    while !game.moves.is_empty() {
                        game = undo(&game);
                    }
                    black_box(game)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(replay_benches, bench_replay);
criterion_main!(replay_benches);
