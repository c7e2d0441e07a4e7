//! Match history listing and per-game detail.

use anyhow::{Result, bail};
use xscore_core::{DocumentStore, Game, HistoryStore, Match, Player};

use crate::cli::HistoryAction;
use crate::commands::{nth, paint};

pub fn run<S: DocumentStore>(store: S, action: Option<HistoryAction>) -> Result<()> {
    let history = HistoryStore::load(store);

    match action {
        None => {
            if history.is_empty() {
                println!("No matches recorded yet");
                return Ok(());
            }
            for (index, m) in history.matches().iter().enumerate() {
                println!("{:>3}. {}", index + 1, summary(m));
            }
        }
        Some(HistoryAction::Show { index }) => {
            let Some(m) = nth(history.matches(), index) else {
                bail!("No match #{} ({} in history)", index, history.len());
            };
            print_match(m);
        }
    }

    Ok(())
}

fn completed_on(m: &Match) -> String {
    m.completed_at()
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "----------".to_string())
}

/// One-line summary: date, players, game score and winner
fn summary(m: &Match) -> String {
    let winner = m
        .winner()
        .map(|player| paint(player, &m.display_name(player)))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {} vs {}  {}-{}  winner: {}",
        completed_on(m),
        paint(Player::One, &m.display_name(Player::One)),
        paint(Player::Two, &m.display_name(Player::Two)),
        m.wins(Player::One),
        m.wins(Player::Two),
        winner
    )
}

fn print_match(m: &Match) {
    println!("{}", summary(m));
    println!("First to {} points", m.target_score().get());

    for (index, game) in m.games().iter().enumerate() {
        println!();
        print_game(index + 1, game);
    }
}

fn print_game(number: usize, game: &Game) {
    let winner = game
        .winner()
        .map(|player| game.display_name(player))
        .unwrap_or_default();
    println!(
        "Game {}: {} {} - {} {}  ({})",
        number,
        paint(Player::One, &game.composite(Player::One).name()),
        game.score(Player::One),
        game.score(Player::Two),
        paint(Player::Two, &game.composite(Player::Two).name()),
        winner
    );

    for (entry, (score1, score2)) in game.scoring_history().iter().zip(game.running_totals()) {
        let line = format!(
            "{} {} with {} (+{})",
            game.display_name(entry.player),
            entry.scoring_type,
            entry.composite.name(),
            entry.points()
        );
        println!("    {:>2}-{:<2} {}", score1, score2, paint(entry.player, &line));
    }
}
