use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::composite::Composite;
use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum ScoringType {
    #[serde(rename = "Spin Finish")]
    #[strum(to_string = "Spin Finish", serialize = "spin")]
    SpinFinish,
    #[serde(rename = "Over Finish")]
    #[strum(to_string = "Over Finish", serialize = "over")]
    OverFinish,
    #[serde(rename = "Burst Finish")]
    #[strum(to_string = "Burst Finish", serialize = "burst")]
    BurstFinish,
    #[serde(rename = "X-treme Finish")]
    #[strum(
        to_string = "X-treme Finish",
        serialize = "xtreme",
        serialize = "extreme"
    )]
    XtremeFinish,
}

impl ScoringType {
    /// Points awarded for this finish
    pub fn points(&self) -> u32 {
        match self {
            Self::SpinFinish => 1,
            Self::OverFinish | Self::BurstFinish => 2,
            Self::XtremeFinish => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// One of the two sides of a game
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    #[strum(to_string = "Player 1")]
    One,
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl TryFrom<u8> for Player {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(Error::InvalidPlayer(other)),
        }
    }
}

/// Points needed to win a game, 4 to 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct TargetScore(u32);

impl TargetScore {
    pub const MIN: u32 = 4;
    pub const MAX: u32 = 7;

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidTargetScore(value))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for TargetScore {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<TargetScore> for u32 {
    fn from(target: TargetScore) -> Self {
        target.0
    }
}

impl TryFrom<u32> for TargetScore {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

/// A single recorded finish, bound to the composite that scored it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringEntry {
    pub id: Uuid,
    pub player: Player,
    #[serde(rename = "type")]
    pub scoring_type: ScoringType,
    #[serde(rename = "beyblade")]
    pub composite: Composite,
}

impl ScoringEntry {
    pub fn new(player: Player, scoring_type: ScoringType, composite: Composite) -> Self {
        Self {
            id: Uuid::new_v4(),
            player,
            scoring_type,
            composite,
        }
    }

    pub fn points(&self) -> u32 {
        self.scoring_type.points()
    }
}
