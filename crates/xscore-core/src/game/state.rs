use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use tracing::debug;
use uuid::Uuid;

use crate::composite::Composite;
use crate::error::{Error, Result};
use crate::game::{Player, ScoringEntry, ScoringType, TargetScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum GameState {
    InProgress,
    Completed,
}

/// One round between two composites, played to a target score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    id: Uuid,
    #[serde(rename = "player1Beyblade")]
    player1_composite: Composite,
    #[serde(rename = "player2Beyblade")]
    player2_composite: Composite,
    player1_name: String,
    player2_name: String,
    target_score: TargetScore,
    player1_score: u32,
    player2_score: u32,
    scoring_history: Vec<ScoringEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<Player>,
}

impl Game {
    pub fn new(
        player1_composite: Composite,
        player2_composite: Composite,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        target_score: TargetScore,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1_composite,
            player2_composite,
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            target_score,
            player1_score: 0,
            player2_score: 0,
            scoring_history: Vec::new(),
            winner: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn target_score(&self) -> TargetScore {
        self.target_score
    }

    /// Composite currently assigned to a player
    pub fn composite(&self, player: Player) -> &Composite {
        match player {
            Player::One => &self.player1_composite,
            Player::Two => &self.player2_composite,
        }
    }

    /// Player name as entered (may be empty)
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

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    pub fn scoring_history(&self) -> &[ScoringEntry] {
        &self.scoring_history
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn state(&self) -> GameState {
        if self.winner.is_some() {
            GameState::Completed
        } else {
            GameState::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether anything has been scored yet
    pub fn has_started(&self) -> bool {
        !self.scoring_history.is_empty()
    }

    /// Swap the composite a player is using; past entries keep their composite
    pub fn set_composite(&mut self, player: Player, composite: Composite) -> Result<()> {
        if self.is_completed() {
            return Err(Error::GameCompleted);
        }

        debug!("{} switches to {}", player, composite.name());
        match player {
            Player::One => self.player1_composite = composite,
            Player::Two => self.player2_composite = composite,
        }
        Ok(())
    }

    /// Award a finish to `player` and complete the game once the target is reached
    pub fn record_score(&mut self, player: Player, scoring_type: ScoringType) -> Result<GameState> {
        if self.is_completed() {
            return Err(Error::GameCompleted);
        }

        let points = scoring_type.points();
        match player {
            Player::One => self.player1_score += points,
            Player::Two => self.player2_score += points,
        }

        let entry = ScoringEntry::new(player, scoring_type, self.composite(player).clone());
        self.scoring_history.push(entry);

        debug!(
            "{} scores {} (+{}): {}-{}",
            player, scoring_type, points, self.player1_score, self.player2_score
        );

        // The opponent was below target before this score, so the scorer leads strictly.
        if self.score(player) >= self.target_score.get() {
            self.winner = Some(player);
            debug!("Game {} won by {}", self.id, player);
        }

        Ok(self.state())
    }

    /// Scores of both players after each entry, in order
    pub fn running_totals(&self) -> Vec<(u32, u32)> {
        self.scoring_history
            .iter()
            .scan((0, 0), |totals, entry| {
                match entry.player {
                    Player::One => totals.0 += entry.points(),
                    Player::Two => totals.1 += entry.points(),
                }
                Some(*totals)
            })
            .collect()
    }
}

/// `name`, or "Player N" when it is blank
pub fn display_name(name: &str, player: Player) -> String {
    if name.trim().is_empty() {
        player.to_string()
    } else {
        name.to_string()
    }
}
