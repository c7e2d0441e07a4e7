//! End-to-end flow: catalog -> composites -> match -> history -> stats.

use tempfile::TempDir;
use xscore_core::{
    HistoryStore, JsonFileStore, MATCHES_KEY, MatchSession, MatchState, MatchupKind, PartCatalog,
    PartCategory, Player, SavedComposites, ScoreOutcome, ScoringType, TargetScore,
    build_composite_checked, matchup_report,
};

fn build(catalog: &PartCatalog, blade: &str, ratchet: &str, bit: &str) -> xscore_core::Composite {
    build_composite_checked(
        catalog.require(PartCategory::Blade, blade).unwrap().clone(),
        catalog.require(PartCategory::Ratchet, ratchet).unwrap().clone(),
        catalog.require(PartCategory::Bit, bit).unwrap().clone(),
    )
    .unwrap()
}

#[test]
fn test_full_match_is_recorded_and_reloaded() {
    let dir = TempDir::new().unwrap();
    let catalog = PartCatalog::new();

    let mut saved = SavedComposites::load(JsonFileStore::new(dir.path()));
    let wizard = build(&catalog, "WizardRod", "3-60", "Bound Spike");
    let phoenix = build(&catalog, "PhoenixWing", "9-60", "Gear Flat");
    assert!(saved.save(wizard.clone()));
    assert!(saved.save(phoenix.clone()));

    let mut history = HistoryStore::load(JsonFileStore::new(dir.path()));
    let mut session = MatchSession::start(
        "Ann",
        "Bo",
        vec![wizard.clone()],
        vec![phoenix.clone()],
        TargetScore::new(4).unwrap(),
    )
    .unwrap();
    assert_eq!(session.state(), MatchState::AwaitingFirstGame);

    // Game 1: Ann 2 + 1 + 2 = 5
    session.record_score(Player::One, ScoringType::OverFinish).unwrap();
    session.record_score(Player::One, ScoringType::SpinFinish).unwrap();
    let outcome = session.record_score(Player::One, ScoringType::OverFinish).unwrap();
    assert_eq!(
        outcome,
        ScoreOutcome::GameWon {
            winner: Player::One,
            game_number: 1
        }
    );
    assert_eq!(
        session.record().games()[0].running_totals(),
        vec![(2, 0), (3, 0), (5, 0)]
    );

    // Game 2: Bo wins
    session.record_score(Player::Two, ScoringType::XtremeFinish).unwrap();
    session.record_score(Player::Two, ScoringType::BurstFinish).unwrap();

    // Game 3: Ann wins the decider
    session.record_score(Player::Two, ScoringType::SpinFinish).unwrap();
    session.record_score(Player::One, ScoringType::XtremeFinish).unwrap();
    let outcome = session.record_score(Player::One, ScoringType::BurstFinish).unwrap();
    assert_eq!(
        outcome,
        ScoreOutcome::MatchWon {
            winner: Player::One
        }
    );
    assert_eq!(session.record().games().len(), 3);

    assert!(history.add_match(session.record()));
    assert!(!history.add_match(session.record()));
    assert!(dir.path().join(format!("{}.json", MATCHES_KEY)).exists());

    let reloaded = HistoryStore::load(JsonFileStore::new(dir.path()));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.matches()[0], *session.record());

    let report = matchup_report(reloaded.matches(), MatchupKind::Composite);
    assert_eq!(report.len(), 1);
    let (matchup, stats) = &report[0];
    assert_eq!(matchup.left, "WizardRod 3-60 BS");
    assert_eq!(matchup.right, "PhoenixWing 9-60 GF");
    assert_eq!((stats.wins, stats.losses), (2, 1));

    let saved_again = SavedComposites::load(JsonFileStore::new(dir.path()));
    assert_eq!(saved_again.len(), 8);
    assert_eq!(saved_again.get(phoenix.id), Some(&phoenix));
}

#[test]
fn test_simple_scoreboard_leaves_history_untouched() {
    let dir = TempDir::new().unwrap();
    let mut history = HistoryStore::load(JsonFileStore::new(dir.path()));

    let mut session = MatchSession::simple(TargetScore::new(5).unwrap());
    while !session.is_completed() {
        session.record_score(Player::Two, ScoringType::XtremeFinish).unwrap();
    }
    assert_eq!(session.record().games().len(), 2);
    assert_eq!(session.record().winner(), Some(Player::Two));

    assert!(!history.add_match(session.record()));
    assert!(history.is_empty());
    assert!(!dir.path().join(format!("{}.json", MATCHES_KEY)).exists());
}

#[test]
fn test_best_of_three_never_exceeds_three_games() {
    let sequences: [&[Player]; 4] = [
        &[Player::One, Player::One],
        &[Player::Two, Player::Two],
        &[Player::One, Player::Two, Player::Two],
        &[Player::Two, Player::One, Player::One],
    ];

    for winners in sequences {
        let mut session = MatchSession::simple(TargetScore::default());
        for (index, winner) in winners.iter().enumerate() {
            assert!(!session.is_completed());
            session.record_score(*winner, ScoringType::XtremeFinish).unwrap();
            let outcome = session.record_score(*winner, ScoringType::XtremeFinish).unwrap();
            if index + 1 == winners.len() {
                assert_eq!(outcome, ScoreOutcome::MatchWon { winner: *winner });
            }
        }
        assert!(session.is_completed());
        assert_eq!(session.record().games().len(), winners.len());
        assert!(session.record().games().len() <= xscore_core::MAX_GAMES);
    }
}
