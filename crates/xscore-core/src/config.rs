use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::TargetScore;

/// User settings, read from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted history and saved composites; unset
    /// means the caller's platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub default_target_score: TargetScore,
    pub player1_name: String,
    pub player2_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_target_score: TargetScore::default(),
            player1_name: String::new(),
            player2_name: String::new(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Configured data directory, or `fallback` when none is set
    pub fn data_dir_or(&self, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(fallback)
    }
}
