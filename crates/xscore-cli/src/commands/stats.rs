//! Matchup statistics over the stored history.

use anyhow::Result;
use serde::Serialize;
use xscore_core::{
    DocumentStore, HistoryStore, Matchup, MatchupKind, MatchupStats, PartCategory,
    matchup_report, scoring_breakdown,
};

use crate::cli::OutputFormat;

/// JSON row: the pairing, its counters and the derived win rate
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchupRow<'a> {
    #[serde(flatten)]
    matchup: &'a Matchup,
    #[serde(flatten)]
    stats: &'a MatchupStats,
    win_percentage: f64,
}

pub fn run<S: DocumentStore>(
    store: S,
    part: Option<PartCategory>,
    format: OutputFormat,
) -> Result<()> {
    let history = HistoryStore::load(store);
    let kind = part.map_or(MatchupKind::Composite, MatchupKind::Part);
    let report = matchup_report(history.matches(), kind);

    match format {
        OutputFormat::Json => {
            let rows: Vec<MatchupRow> = report
                .iter()
                .map(|(matchup, stats)| MatchupRow {
                    matchup,
                    stats,
                    win_percentage: stats.win_percentage(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            if report.is_empty() {
                println!("No matches recorded yet");
            }
            for (matchup, stats) in &report {
                print_matchup(matchup, stats);
            }
        }
    }

    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn print_matchup(matchup: &Matchup, stats: &MatchupStats) {
    println!("{} vs {}", matchup.left, matchup.right);
    println!(
        "  {} games, {}W {}L ({})",
        stats.games(),
        stats.wins,
        stats.losses,
        percent(stats.win_percentage())
    );
    for (scoring_type, share) in scoring_breakdown(stats) {
        println!(
            "  {:<15} {:>6} for  {:>6} against",
            scoring_type.label(),
            percent(share),
            percent(stats.scoring_type_against_percentage(scoring_type))
        );
    }
    println!();
}
