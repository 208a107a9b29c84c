//! Common types used throughout the standings service

use crate::error::{Result, StandingsError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Team identifier; teams are known only by name
pub type TeamName = String;

/// Per-team stats keyed by team name
pub type StatsTable = HashMap<TeamName, Stats>;

/// Longest team name a game store accepts
pub const MAX_TEAM_NAME_LEN: usize = 40;

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// One completed match between two named teams
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub team_a: TeamName,
    pub score_a: u32,
    pub team_b: TeamName,
    pub score_b: u32,
}

impl Game {
    pub fn new(
        team_a: impl Into<TeamName>,
        score_a: u32,
        team_b: impl Into<TeamName>,
        score_b: u32,
    ) -> Self {
        Self {
            team_a: team_a.into(),
            score_a,
            team_b: team_b.into(),
            score_b,
        }
    }

    /// Whether the given team played in this game
    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Check the team names of an already-typed game
    pub fn validate(&self) -> Result<()> {
        validate_team_name(&self.team_a)?;
        validate_team_name(&self.team_b)?;

        if self.team_a == self.team_b {
            return Err(StandingsError::validation(format!(
                "team '{}' cannot play against itself",
                self.team_a
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.team_a, self.score_a, self.score_b, self.team_b
        )
    }
}

fn validate_team_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StandingsError::validation("team name cannot be empty"));
    }
    if name.chars().count() > MAX_TEAM_NAME_LEN {
        return Err(StandingsError::validation(format!(
            "team name '{}' is longer than {} characters",
            name, MAX_TEAM_NAME_LEN
        )));
    }
    Ok(())
}

/// Raw match result as submitted by a client
///
/// Scores are signed so that a negative value is reported as a
/// validation error rather than a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSubmission {
    pub team_a: String,
    pub score_a: i64,
    pub team_b: String,
    pub score_b: i64,
}

impl GameSubmission {
    /// Turn the submission into a [`Game`], rejecting malformed input
    pub fn validate(self) -> Result<Game> {
        let score_a = validate_score(&self.team_a, self.score_a)?;
        let score_b = validate_score(&self.team_b, self.score_b)?;

        let game = Game::new(self.team_a, score_a, self.team_b, score_b);
        game.validate()?;
        Ok(game)
    }
}

fn validate_score(team: &str, score: i64) -> Result<u32> {
    u32::try_from(score).map_err(|_| {
        StandingsError::validation(format!(
            "score {} for team '{}' must be a non-negative integer",
            score, team
        ))
    })
}

/// Aggregated outcome counters for one team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub team: TeamName,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
}

impl Stats {
    /// Zeroed stats for a team that has not been seen yet
    pub fn new(team: impl Into<TeamName>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.played += 1;
        self.won += 1;
        self.points += POINTS_FOR_WIN;
    }

    pub(crate) fn record_draw(&mut self) {
        self.played += 1;
        self.drawn += 1;
        self.points += POINTS_FOR_DRAW;
    }

    pub(crate) fn record_loss(&mut self) {
        self.played += 1;
        self.lost += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(team_a: &str, score_a: i64, team_b: &str, score_b: i64) -> GameSubmission {
        GameSubmission {
            team_a: team_a.to_string(),
            score_a,
            team_b: team_b.to_string(),
            score_b,
        }
    }

    #[test]
    fn test_valid_submission_becomes_game() {
        let game = submission("a", 2, "b", 1).validate().unwrap();
        assert_eq!(game, Game::new("a", 2, "b", 1));
    }

    #[test]
    fn test_negative_score_rejected() {
        let err = submission("a", -1, "b", 0).validate().unwrap_err();
        assert!(matches!(err, StandingsError::Validation { .. }));
    }

    #[test]
    fn test_same_team_rejected() {
        let err = submission("a", 1, "a", 0).validate().unwrap_err();
        assert!(matches!(err, StandingsError::Validation { .. }));
    }

    #[test]
    fn test_blank_and_long_names_rejected() {
        assert!(submission("  ", 1, "b", 0).validate().is_err());

        let long_name = "x".repeat(MAX_TEAM_NAME_LEN + 1);
        assert!(submission(&long_name, 1, "b", 0).validate().is_err());

        let max_name = "x".repeat(MAX_TEAM_NAME_LEN);
        assert!(submission(&max_name, 1, "b", 0).validate().is_ok());
    }

    #[test]
    fn test_game_json_uses_camel_case() {
        let json = serde_json::to_value(Game::new("a", 2, "b", 1)).unwrap();
        assert_eq!(json["teamA"], "a");
        assert_eq!(json["scoreB"], 1);
    }

    #[test]
    fn test_game_involves() {
        let game = Game::new("a", 0, "b", 0);
        assert!(game.involves("a"));
        assert!(game.involves("b"));
        assert!(!game.involves("c"));
    }
}
