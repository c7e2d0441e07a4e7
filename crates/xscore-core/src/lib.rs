//! # xscore-core
//!
//! Core library for the xscore Beyblade X scorekeeper.
//!
//! This crate provides:
//! - Part catalog and composite ("Beyblade") assembly
//! - Game and best-of-three match state machines
//! - Bounded match history with JSON document persistence
//! - Matchup statistics (composite vs composite, part vs part)
//!
//! Stores take their [`DocumentStore`] by value, so callers decide where
//! documents live and tests can run entirely in memory.

pub mod catalog;
pub mod composite;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod matches;
pub mod stats;
pub mod storage;

pub use catalog::{Part, PartCatalog, PartCategory, SavedComposites};
pub use composite::{Composite, bit_initials, build_composite, build_composite_checked};
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Game, GameState, Player, ScoringEntry, ScoringType, TargetScore};
pub use history::{HISTORY_CAPACITY, HistoryStore};
pub use matches::{GAMES_TO_WIN, MAX_GAMES, Match, MatchSession, MatchState, ScoreOutcome};
pub use stats::{
    Matchup, MatchupKind, MatchupStats, matchup_report, matchup_stats, matchups,
    scoring_breakdown,
};
pub use storage::{COMPOSITES_KEY, DocumentStore, JsonFileStore, MATCHES_KEY, MemoryStore};
