use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use tracing::info;
use uuid::Uuid;

use crate::composite::Composite;
use crate::error::{Error, Result};
use crate::game::{Game, Player, TargetScore, display_name};

/// Game wins needed to take a match
pub const GAMES_TO_WIN: usize = 2;

/// Upper bound on games in one match (best of three)
pub const MAX_GAMES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum MatchState {
    AwaitingFirstGame,
    GameInProgress,
    AwaitingNextGame,
    Completed,
}

/// A best-of-three sequence of games between two players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    id: Uuid,
    player1_name: String,
    player2_name: String,
    #[serde(rename = "player1Beyblades")]
    player1_roster: Vec<Composite>,
    #[serde(rename = "player2Beyblades")]
    player2_roster: Vec<Composite>,
    games: Vec<Game>,
    target_score: TargetScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<Player>,
    #[serde(rename = "isSimpleMatch")]
    is_simple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn new(
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        player1_roster: Vec<Composite>,
        player2_roster: Vec<Composite>,
        target_score: TargetScore,
        is_simple: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            player1_roster,
            player2_roster,
            games: Vec::new(),
            target_score,
            winner: None,
            is_simple,
            started_at: Some(Utc::now()),
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        }
    }

    /// Player name, or "Player N" when none was entered
    pub fn display_name(&self, player: Player) -> String {
        display_name(self.player_name(player), player)
    }

    /// Composites a player brought to the match (empty in simple mode)
    pub fn roster(&self, player: Player) -> &[Composite] {
        match player {
            Player::One => &self.player1_roster,
            Player::Two => &self.player2_roster,
        }
    }

    /// Completed games, in play order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn target_score(&self) -> TargetScore {
        self.target_score
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_simple(&self) -> bool {
        self.is_simple
    }

    pub fn is_completed(&self) -> bool {
        self.winner.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Games won so far by `player`
    pub fn wins(&self, player: Player) -> usize {
        self.games
            .iter()
            .filter(|g| g.winner() == Some(player))
            .count()
    }

    /// Match state as seen from the stored record (no game in flight)
    pub fn state(&self) -> MatchState {
        if self.is_completed() {
            MatchState::Completed
        } else if self.games.is_empty() {
            MatchState::AwaitingFirstGame
        } else {
            MatchState::AwaitingNextGame
        }
    }

    /// Append a finished game; returns the match winner once someone has two wins
    pub fn record_game(&mut self, game: Game) -> Result<Option<Player>> {
        if self.is_completed() || self.games.len() >= MAX_GAMES {
            return Err(Error::MatchCompleted);
        }
        if !game.is_completed() {
            return Err(Error::GameNotCompleted);
        }

        self.games.push(game);

        if let Some(winner) = Player::BOTH
            .into_iter()
            .find(|p| self.wins(*p) >= GAMES_TO_WIN)
        {
            self.winner = Some(winner);
            self.completed_at = Some(Utc::now());
            info!(
                "Match {} won by {} ({}-{})",
                self.id,
                self.display_name(winner),
                self.wins(Player::One),
                self.wins(Player::Two)
            );
        }

        Ok(self.winner)
    }
}
