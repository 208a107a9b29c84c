//! Standings engine
//!
//! Pure functions that fold game records into per-team stats and rank
//! them. Nothing here performs I/O; each call owns the table it builds.

use crate::error::{Result, StandingsError};
use crate::types::{Game, Stats, StatsTable};
use std::cmp::Ordering;

/// Apply one game to the table and hand the table back
pub fn fold_game(mut table: StatsTable, game: &Game) -> StatsTable {
    let outcome = game.score_a.cmp(&game.score_b);

    {
        let team_a = table
            .entry(game.team_a.clone())
            .or_insert_with(|| Stats::new(game.team_a.clone()));
        match outcome {
            Ordering::Greater => team_a.record_win(),
            Ordering::Less => team_a.record_loss(),
            Ordering::Equal => team_a.record_draw(),
        }
    }

    let team_b = table
        .entry(game.team_b.clone())
        .or_insert_with(|| Stats::new(game.team_b.clone()));
    match outcome {
        Ordering::Greater => team_b.record_loss(),
        Ordering::Less => team_b.record_win(),
        Ordering::Equal => team_b.record_draw(),
    }

    table
}

/// Fold every game, in order, into a fresh table
pub fn compute_stats(games: &[Game]) -> StatsTable {
    games.iter().fold(StatsTable::new(), fold_game)
}

/// Order used for the league table: points descending, then team name
pub fn standings_order(a: &Stats, b: &Stats) -> Ordering {
    b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team))
}

/// All teams ordered for the league table
pub fn rank_all(table: &StatsTable) -> Vec<Stats> {
    let mut ranked: Vec<Stats> = table.values().cloned().collect();
    ranked.sort_by(standings_order);
    ranked
}

/// Stats for a single team
pub fn stats_for_team(table: &StatsTable, team: &str) -> Result<Stats> {
    table
        .get(team)
        .cloned()
        .ok_or_else(|| StandingsError::team_not_found(team))
}
