use tracing::{debug, info};

use crate::composite::Composite;
use crate::error::{Error, Result};
use crate::game::{Game, GameState, Player, ScoringType, TargetScore};
use crate::matches::{Match, MatchState};

/// Name shown for each side of a simple scoreboard
const SIMPLE_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// What a single recorded score led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Points added, game still running
    Scored,
    /// The game ended and the next one is open
    GameWon { winner: Player, game_number: usize },
    /// The game ended and decided the match
    MatchWon { winner: Player },
}

/// Drives a match: owns the record plus the game currently being played
#[derive(Debug, Clone)]
pub struct MatchSession {
    record: Match,
    current: Option<Game>,
    /// Used for any side whose roster is empty
    placeholder: Composite,
}

impl MatchSession {
    /// Start a tracked match; both rosters must hold at least one composite
    pub fn start(
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
        player1_roster: Vec<Composite>,
        player2_roster: Vec<Composite>,
        target_score: TargetScore,
    ) -> Result<Self> {
        if player1_roster.is_empty() {
            return Err(Error::EmptyRoster(Player::One));
        }
        if player2_roster.is_empty() {
            return Err(Error::EmptyRoster(Player::Two));
        }

        let record = Match::new(
            player1_name,
            player2_name,
            player1_roster,
            player2_roster,
            target_score,
            false,
        );
        info!(
            "Match {} started: {} vs {} (first to {})",
            record.id(),
            record.display_name(Player::One),
            record.display_name(Player::Two),
            target_score.get()
        );
        Ok(Self::with_record(record))
    }

    /// Start a scoreboard-only match: no rosters, never kept in history
    pub fn simple(target_score: TargetScore) -> Self {
        let [name1, name2] = SIMPLE_PLAYER_NAMES;
        let record = Match::new(name1, name2, Vec::new(), Vec::new(), target_score, true);
        info!(
            "Simple match {} started (first to {})",
            record.id(),
            target_score.get()
        );
        Self::with_record(record)
    }

    fn with_record(record: Match) -> Self {
        let mut session = Self {
            record,
            current: None,
            placeholder: Composite::placeholder(),
        };
        session.current = Some(session.opening_game());
        session
    }

    /// A fresh game using each player's first composite
    fn opening_game(&self) -> Game {
        Game::new(
            self.opening_composite(Player::One),
            self.opening_composite(Player::Two),
            self.record.player_name(Player::One),
            self.record.player_name(Player::Two),
            self.record.target_score(),
        )
    }

    fn opening_composite(&self, player: Player) -> Composite {
        self.record
            .roster(player)
            .first()
            .unwrap_or(&self.placeholder)
            .clone()
    }

    pub fn state(&self) -> MatchState {
        match &self.current {
            Some(game) if game.has_started() => MatchState::GameInProgress,
            _ => self.record.state(),
        }
    }

    pub fn record(&self) -> &Match {
        &self.record
    }

    pub fn into_record(self) -> Match {
        self.record
    }

    /// The game being played, `None` once the match is decided
    pub fn current_game(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    /// 1-based number of the current game
    pub fn game_number(&self) -> usize {
        self.record.games().len() + 1
    }

    pub fn wins(&self, player: Player) -> usize {
        self.record.wins(player)
    }

    pub fn is_completed(&self) -> bool {
        self.record.is_completed()
    }

    /// Pick a different composite for `player`, before or during a game
    pub fn select_composite(&mut self, player: Player, composite: Composite) -> Result<()> {
        let game = self.current.as_mut().ok_or(Error::MatchCompleted)?;

        if !self.record.is_simple() && !self.record.roster(player).contains(&composite) {
            return Err(Error::CompositeNotInRoster {
                player,
                name: composite.name(),
            });
        }

        game.set_composite(player, composite)
    }

    /// Record a finish for `player` in the current game
    pub fn record_score(
        &mut self,
        player: Player,
        scoring_type: ScoringType,
    ) -> Result<ScoreOutcome> {
        let game = self.current.as_mut().ok_or(Error::MatchCompleted)?;
        if game.record_score(player, scoring_type)? == GameState::InProgress {
            return Ok(ScoreOutcome::Scored);
        }

        let finished = self.current.take().ok_or(Error::MatchCompleted)?;
        let game_winner = finished.winner().unwrap_or(player);
        let game_number = self.record.games().len() + 1;
        debug!(
            "Game {} won by {} ({}-{})",
            game_number,
            finished.display_name(game_winner),
            finished.score(Player::One),
            finished.score(Player::Two)
        );

        if let Some(winner) = self.record.record_game(finished)? {
            return Ok(ScoreOutcome::MatchWon { winner });
        }

        self.current = Some(self.opening_game());
        Ok(ScoreOutcome::GameWon {
            winner: game_winner,
            game_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Part;
    use crate::composite::build_composite;
    use crate::matches::MAX_GAMES;

    fn composite(blade: &str) -> Composite {
        build_composite(Part::blade(blade), Part::ratchet("1-60"), Part::bit("Rush"))
    }

    fn session() -> MatchSession {
        MatchSession::start(
            "Ann",
            "Bo",
            vec![composite("A1"), composite("A2")],
            vec![composite("B1")],
            TargetScore::new(4).unwrap(),
        )
        .unwrap()
    }

    fn win_game(session: &mut MatchSession, player: Player) -> ScoreOutcome {
        session.record_score(player, ScoringType::XtremeFinish).unwrap();
        session.record_score(player, ScoringType::SpinFinish).unwrap()
    }

    #[test]
    fn test_start_requires_rosters() {
        let target = TargetScore::default();
        let err = MatchSession::start("A", "B", vec![], vec![composite("B")], target).unwrap_err();
        assert!(matches!(err, Error::EmptyRoster(Player::One)));

        let err = MatchSession::start("A", "B", vec![composite("A")], vec![], target).unwrap_err();
        assert!(matches!(err, Error::EmptyRoster(Player::Two)));
    }

    #[test]
    fn test_state_progression() {
        let mut s = session();
        assert_eq!(s.state(), MatchState::AwaitingFirstGame);
        assert_eq!(s.game_number(), 1);

        assert_eq!(
            s.record_score(Player::One, ScoringType::SpinFinish).unwrap(),
            ScoreOutcome::Scored
        );
        assert_eq!(s.state(), MatchState::GameInProgress);

        assert_eq!(
            s.record_score(Player::One, ScoringType::XtremeFinish).unwrap(),
            ScoreOutcome::GameWon {
                winner: Player::One,
                game_number: 1
            }
        );
        assert_eq!(s.state(), MatchState::AwaitingNextGame);
        assert_eq!(s.game_number(), 2);
        assert_eq!(s.wins(Player::One), 1);
    }

    #[test]
    fn test_straight_sets_ends_after_two_games() {
        let mut s = session();
        win_game(&mut s, Player::One);
        assert_eq!(
            win_game(&mut s, Player::One),
            ScoreOutcome::MatchWon {
                winner: Player::One
            }
        );
        assert_eq!(s.state(), MatchState::Completed);
        assert!(s.current_game().is_none());
        assert_eq!(s.record().games().len(), 2);
        assert_eq!(s.record().winner(), Some(Player::One));
    }

    #[test]
    fn test_split_needs_third_game() {
        let mut s = session();
        win_game(&mut s, Player::One);
        assert_eq!(
            win_game(&mut s, Player::Two),
            ScoreOutcome::GameWon {
                winner: Player::Two,
                game_number: 2
            }
        );
        assert!(s.current_game().is_some());
        assert_eq!(
            win_game(&mut s, Player::One),
            ScoreOutcome::MatchWon {
                winner: Player::One
            }
        );
        assert_eq!(s.record().games().len(), MAX_GAMES);
    }

    #[test]
    fn test_scoring_after_match_rejected() {
        let mut s = session();
        win_game(&mut s, Player::Two);
        win_game(&mut s, Player::Two);
        assert!(matches!(
            s.record_score(Player::One, ScoringType::SpinFinish),
            Err(Error::MatchCompleted)
        ));
        assert!(matches!(
            s.select_composite(Player::One, composite("A1")),
            Err(Error::MatchCompleted)
        ));
    }

    #[test]
    fn test_next_game_reuses_first_composites() {
        let mut s = session();
        let a2 = s.record().roster(Player::One)[1].clone();
        s.select_composite(Player::One, a2.clone()).unwrap();
        win_game(&mut s, Player::One);

        let played = &s.record().games()[0];
        assert_eq!(played.composite(Player::One), &a2);

        let next = s.current_game().unwrap();
        assert_eq!(next.composite(Player::One), &s.record().roster(Player::One)[0]);
        assert_eq!(next.score(Player::One), 0);
        assert_eq!(next.player_name(Player::Two), "Bo");
    }

    #[test]
    fn test_select_composite_outside_roster() {
        let mut s = session();
        let err = s.select_composite(Player::Two, composite("Stranger")).unwrap_err();
        assert!(matches!(err, Error::CompositeNotInRoster { player: Player::Two, .. }));
    }

    #[test]
    fn test_simple_session() {
        let mut s = MatchSession::simple(TargetScore::new(4).unwrap());
        assert!(s.record().is_simple());
        assert!(s.record().roster(Player::One).is_empty());

        let game = s.current_game().unwrap();
        assert_eq!(game.composite(Player::One), game.composite(Player::Two));
        assert_eq!(game.composite(Player::One).name(), "Default Default D");
        assert_eq!(game.player_name(Player::Two), "Player 2");

        win_game(&mut s, Player::Two);
        win_game(&mut s, Player::Two);
        let record = s.record();
        assert_eq!(record.winner(), Some(Player::Two));
        assert!(record.is_simple());
    }

    #[test]
    fn test_simple_session_accepts_any_composite() {
        let mut s = MatchSession::simple(TargetScore::default());
        s.select_composite(Player::One, composite("Anything")).unwrap();
        assert_eq!(
            s.current_game().unwrap().composite(Player::One).blade.name,
            "Anything"
        );
    }
}
