use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::PartCategory;
use crate::composite::Composite;
use crate::game::{Game, Player, ScoringType};
use crate::matches::Match;

/// What each side of a game is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchupKind {
    /// Full composite display name
    Composite,
    /// Name of the part in one slot
    Part(PartCategory),
}

impl MatchupKind {
    pub fn key(&self, composite: &Composite) -> String {
        match self {
            Self::Composite => composite.name(),
            Self::Part(category) => composite.part(*category).name.clone(),
        }
    }

    fn keys(&self, game: &Game) -> (String, String) {
        (
            self.key(game.composite(Player::One)),
            self.key(game.composite(Player::Two)),
        )
    }
}

/// Ordered pairing: `left` played as player 1, `right` as player 2
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matchup {
    pub left: String,
    pub right: String,
}

impl Matchup {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Win/loss and finish distribution for the left side of a matchup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupStats {
    pub wins: u32,
    pub losses: u32,
    /// Finishes scored by the left side
    pub scoring_for: BTreeMap<ScoringType, u32>,
    /// Finishes conceded to the right side
    pub scoring_against: BTreeMap<ScoringType, u32>,
}

impl MatchupStats {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// wins / (wins + losses), 0 when no games were decided
    pub fn win_percentage(&self) -> f64 {
        ratio(self.wins, self.games())
    }

    /// Share of the left side's finishes that were `scoring_type`
    pub fn scoring_type_percentage(&self, scoring_type: ScoringType) -> f64 {
        share(&self.scoring_for, scoring_type)
    }

    /// Share of the conceded finishes that were `scoring_type`
    pub fn scoring_type_against_percentage(&self, scoring_type: ScoringType) -> f64 {
        share(&self.scoring_against, scoring_type)
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

fn share(counts: &BTreeMap<ScoringType, u32>, scoring_type: ScoringType) -> f64 {
    let total = counts.values().sum();
    ratio(counts.get(&scoring_type).copied().unwrap_or(0), total)
}

fn all_games(matches: &[Match]) -> impl Iterator<Item = &Game> {
    matches.iter().flat_map(|m| m.games())
}

/// Distinct ordered pairings across all games, in order of first appearance
pub fn matchups(matches: &[Match], kind: MatchupKind) -> Vec<Matchup> {
    let mut seen = HashSet::new();
    all_games(matches)
        .map(|game| {
            let (left, right) = kind.keys(game);
            Matchup::new(left, right)
        })
        .filter(|matchup| seen.insert(matchup.clone()))
        .collect()
}

/// Tally games played with exactly this pairing
pub fn matchup_stats(matches: &[Match], kind: MatchupKind, matchup: &Matchup) -> MatchupStats {
    let mut stats = MatchupStats::default();

    for game in all_games(matches) {
        let (left, right) = kind.keys(game);
        if left != matchup.left || right != matchup.right {
            continue;
        }

        match game.winner() {
            Some(Player::One) => stats.wins += 1,
            Some(Player::Two) => stats.losses += 1,
            None => {}
        }

        for entry in game.scoring_history() {
            let counts = match entry.player {
                Player::One => &mut stats.scoring_for,
                Player::Two => &mut stats.scoring_against,
            };
            *counts.entry(entry.scoring_type).or_insert(0) += 1;
        }
    }

    stats
}

/// Every pairing with its stats
pub fn matchup_report(matches: &[Match], kind: MatchupKind) -> Vec<(Matchup, MatchupStats)> {
    matchups(matches, kind)
        .into_iter()
        .map(|matchup| {
            let stats = matchup_stats(matches, kind, &matchup);
            (matchup, stats)
        })
        .collect()
}

/// Finish percentages for every scoring type, in declaration order
pub fn scoring_breakdown(stats: &MatchupStats) -> Vec<(ScoringType, f64)> {
    ScoringType::iter()
        .map(|ty| (ty, stats.scoring_type_percentage(ty)))
        .collect()
}
