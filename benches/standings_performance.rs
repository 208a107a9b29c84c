//! Performance benchmarks for the standings engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tournament::standings::{compute_stats, rank_all};
use tournament::Game;

fn round_robin(teams: usize) -> Vec<Game> {
    let names: Vec<String> = (0..teams).map(|i| format!("team_{:03}", i)).collect();
    let mut games = Vec::new();

    for (i, home) in names.iter().enumerate() {
        for (j, away) in names.iter().enumerate() {
            if i != j {
                games.push(Game::new(
                    home.clone(),
                    ((i * 7 + j) % 5) as u32,
                    away.clone(),
                    ((j * 3 + i) % 4) as u32,
                ));
            }
        }
    }

    games
}

fn bench_compute_stats(c: &mut Criterion) {
    let games = round_robin(20);

    c.bench_function("compute_stats_20_team_season", |b| {
        b.iter(|| compute_stats(black_box(&games)))
    });
}

fn bench_rank_all(c: &mut Criterion) {
    let table = compute_stats(&round_robin(100));

    c.bench_function("rank_all_100_teams", |b| b.iter(|| rank_all(black_box(&table))));
}

criterion_group!(benches, bench_compute_stats, bench_rank_all);
criterion_main!(benches);
