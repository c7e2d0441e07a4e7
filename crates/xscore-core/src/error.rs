use thiserror::Error;

use crate::catalog::PartCategory;
use crate::game::Player;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid target score: {0} (expected 4-7)")]
    InvalidTargetScore(u32),

    #[error("Invalid player number: {0} (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("Game is already completed")]
    GameCompleted,

    #[error("Match is already completed")]
    MatchCompleted,

    #[error("Game has no winner yet")]
    GameNotCompleted,

    #[error("{0} has no composites to play with")]
    EmptyRoster(Player),

    #[error("Composite {name} is not in {player}'s roster")]
    CompositeNotInRoster { player: Player, name: String },

    #[error("Part {name} in the {slot} slot is a {found}")]
    CategoryMismatch {
        slot: PartCategory,
        found: PartCategory,
        name: String,
    },

    #[error("Part name must not be empty")]
    EmptyPartName,

    #[error("Unknown {category}: {name}")]
    UnknownPart {
        category: PartCategory,
        name: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
