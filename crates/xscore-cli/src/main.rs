use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xscore_core::{Config, JsonFileStore};

mod cli;
mod commands;
mod prompter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("xscore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config);
    let data_dir = resolve_data_dir(cli.data_dir, &config);
    let store = JsonFileStore::new(&data_dir);

    match cli.command {
        Command::Parts { category } => commands::parts::run(category),
        Command::Build {
            blade,
            ratchet,
            bit,
            save,
            custom,
        } => commands::build::run(store, &blade, &ratchet, &bit, save, custom),
        Command::Configs { action } => commands::configs::run(store, action),
        Command::Play(args) => commands::play::run(store, &config, args),
        Command::History { action } => commands::history::run(store, action),
        Command::Stats { part, format } => commands::stats::run(store, part, format),
    }
}

fn load_config(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) if e.is_not_found() => Config::default(),
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

/// `--data-dir`, then the config file, then the platform data directory
fn resolve_data_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.data_dir_or(default_data_dir))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("xscore"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
