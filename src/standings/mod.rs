//! League standings: the pure folding engine and the store-backed tournament
//!
//! The engine turns a list of games into per-team stats and a ranked
//! table; the tournament feeds it from a [`crate::store::GameStore`].

pub mod engine;
pub mod tournament;

// Re-export commonly used items
pub use engine::{compute_stats, fold_game, rank_all, standings_order, stats_for_team};
pub use tournament::Tournament;
