use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use xscore_core::PartCategory;

#[derive(Parser)]
#[command(name = "xscore")]
#[command(version, about = "Beyblade X match scorekeeper")]
pub struct Cli {
    #[arg(short, long, default_value = "xscore.toml", global = true)]
    pub config: PathBuf,

    /// Directory for history and saved configurations (overrides the config file)
    #[arg(long, env = "XSCORE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalog parts
    Parts {
        /// Only list one category (blade, ratchet, bit)
        #[arg(short = 't', long)]
        category: Option<PartCategory>,
    },

    /// Assemble a composite from a blade, a ratchet and a bit
    Build {
        blade: String,
        ratchet: String,
        bit: String,

        /// Keep it in the saved configurations
        #[arg(short, long)]
        save: bool,

        /// Accept part names missing from the catalog
        #[arg(long)]
        custom: bool,
    },

    /// List or manage saved configurations
    Configs {
        #[command(subcommand)]
        action: Option<ConfigsAction>,
    },

    /// Score a best-of-three match interactively
    Play(PlayArgs),

    /// Show completed matches
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Matchup statistics across the match history
    Stats {
        /// Compare single parts instead of whole composites
        #[arg(short, long)]
        part: Option<PartCategory>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum ConfigsAction {
    /// Delete a saved configuration by its list number
    Remove { index: usize },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show every game of one match
    Show { index: usize },
}

#[derive(Args)]
pub struct PlayArgs {
    /// Player 1 deck as saved configuration numbers, e.g. 1,3,4
    #[arg(long, value_delimiter = ',', required_unless_present = "simple")]
    pub p1_deck: Vec<usize>,

    /// Player 2 deck as saved configuration numbers
    #[arg(long, value_delimiter = ',', required_unless_present = "simple")]
    pub p2_deck: Vec<usize>,

    #[arg(long)]
    pub p1: Option<String>,

    #[arg(long)]
    pub p2: Option<String>,

    /// Points needed to win a game (4-7)
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Scoreboard only: no decks, not kept in history
    #[arg(long, conflicts_with_all = ["p1_deck", "p2_deck", "p1", "p2"])]
    pub simple: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
