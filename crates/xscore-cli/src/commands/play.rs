//! Interactive best-of-three scoring.

use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use xscore_core::{
    Composite, Config, DocumentStore, Game, HistoryStore, MatchSession, Player, SavedComposites,
    ScoreOutcome, ScoringType, TargetScore,
};

use crate::cli::PlayArgs;
use crate::commands::{nth, paint};
use crate::prompter::Prompter;

const HELP: &str = "\
Commands:
  <player> <finish>    score a finish, e.g. '1 spin', '2 xtreme'
                       finishes: spin (1), over (2), burst (2), xtreme (3)
  swap <player> <n>    switch to composite n of that player's deck
  status               show the current score
  quit                 abandon the match";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Score(Player, ScoringType),
    Swap(Player, usize),
    Status,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.to_ascii_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["quit" | "q" | "exit"] => Ok(Self::Quit),
            ["status" | "s"] => Ok(Self::Status),
            ["help" | "h" | "?"] => Ok(Self::Help),
            ["swap", player, number] => {
                let number = number
                    .parse()
                    .with_context(|| format!("Invalid composite number: {}", number))?;
                Ok(Self::Swap(parse_player(player)?, number))
            }
            [player, finish] => Ok(Self::Score(parse_player(player)?, parse_finish(finish)?)),
            _ => bail!("Unrecognized input: {} (type 'help')", line.trim()),
        }
    }
}

fn parse_player(word: &str) -> Result<Player> {
    let number: u8 = word
        .parse()
        .with_context(|| format!("Invalid player: {} (expected 1 or 2)", word))?;
    Ok(Player::try_from(number)?)
}

fn parse_finish(word: &str) -> Result<ScoringType> {
    word.parse()
        .map_err(|_| anyhow!("Unknown finish: {} (spin, over, burst, xtreme)", word))
}

pub fn run<S: DocumentStore + Clone>(store: S, config: &Config, args: PlayArgs) -> Result<()> {
    let target = match args.target {
        Some(value) => TargetScore::new(value)?,
        None => config.default_target_score,
    };

    let session = if args.simple {
        MatchSession::simple(target)
    } else {
        let saved = SavedComposites::load(store.clone());
        let roster1 = pick_deck(saved.all(), &args.p1_deck)?;
        let roster2 = pick_deck(saved.all(), &args.p2_deck)?;
        let name1 = args.p1.unwrap_or_else(|| config.player1_name.clone());
        let name2 = args.p2.unwrap_or_else(|| config.player2_name.clone());
        MatchSession::start(name1, name2, roster1, roster2, target)?
    };

    let mut history = HistoryStore::load(store);
    let mut prompter = Prompter::new(io::stdin().lock());
    play(session, &mut history, &mut prompter)?;
    Ok(())
}

/// Saved configurations by 1-based number
fn pick_deck(saved: &[Composite], numbers: &[usize]) -> Result<Vec<Composite>> {
    numbers
        .iter()
        .map(|&number| {
            nth(saved, number).cloned().ok_or_else(|| {
                anyhow!(
                    "No saved configuration #{} ({} saved, see 'xscore configs')",
                    number,
                    saved.len()
                )
            })
        })
        .collect()
}

/// Read commands until the match is decided or input ends.
///
/// A completed match is offered to `history`; an abandoned one is dropped.
fn play<S: DocumentStore, R: BufRead>(
    mut session: MatchSession,
    history: &mut HistoryStore<S>,
    prompter: &mut Prompter<R>,
) -> Result<MatchSession> {
    println!("{}", HELP);
    println!();
    print_status(&session);

    while !session.is_completed() {
        let prompt = format!("game {}> ", session.game_number());
        let Some(line) = prompter.read_line(&prompt)? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match input {
            Input::Score(player, scoring_type) => {
                match session.record_score(player, scoring_type) {
                    Ok(outcome) => report(&session, player, scoring_type, outcome),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Input::Swap(player, number) => swap(&mut session, player, number),
            Input::Status => print_status(&session),
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
        }
    }

    if !session.is_completed() {
        println!("Match abandoned");
    } else if history.add_match(session.record()) {
        println!("Match saved to history");
    }

    Ok(session)
}

fn swap(session: &mut MatchSession, player: Player, number: usize) {
    let Some(composite) = nth(session.record().roster(player), number).cloned() else {
        eprintln!(
            "{} has no composite #{}",
            session.record().display_name(player),
            number
        );
        return;
    };

    let name = composite.name();
    match session.select_composite(player, composite) {
        Ok(()) => println!(
            "{}",
            paint(
                player,
                &format!("{} switches to {}", session.record().display_name(player), name)
            )
        ),
        Err(e) => eprintln!("{}", e),
    }
}

fn print_score(game: &Game) {
    println!(
        "  {} {} - {} {}",
        paint(Player::One, &game.display_name(Player::One)),
        game.score(Player::One),
        game.score(Player::Two),
        paint(Player::Two, &game.display_name(Player::Two))
    );
}

fn report(
    session: &MatchSession,
    player: Player,
    scoring_type: ScoringType,
    outcome: ScoreOutcome,
) {
    let record = session.record();
    let line = format!(
        "{} {} (+{})",
        record.display_name(player),
        scoring_type,
        scoring_type.points()
    );
    println!("{}", paint(player, &line));

    match outcome {
        ScoreOutcome::Scored => {
            if let Some(game) = session.current_game() {
                print_score(game);
            }
        }
        ScoreOutcome::GameWon {
            winner,
            game_number,
        } => {
            if let Some(game) = record.games().last() {
                print_score(game);
            }
            println!(
                "Game {} goes to {}. Games {}-{}",
                game_number,
                paint(winner, &record.display_name(winner)),
                record.wins(Player::One),
                record.wins(Player::Two)
            );
            println!();
        }
        ScoreOutcome::MatchWon { winner } => {
            if let Some(game) = record.games().last() {
                print_score(game);
            }
            println!(
                "{} wins the match {}-{}!",
                paint(winner, &record.display_name(winner)),
                record.wins(winner),
                record.wins(winner.opponent())
            );
        }
    }
}

fn print_status(session: &MatchSession) {
    let record = session.record();
    println!(
        "Game {} (first to {})  Games {}-{}",
        session.game_number(),
        record.target_score().get(),
        record.wins(Player::One),
        record.wins(Player::Two)
    );

    let Some(game) = session.current_game() else {
        return;
    };
    for player in Player::BOTH {
        let line = format!(
            "{:<12} {:>2}  {}",
            game.display_name(player),
            game.score(player),
            game.composite(player).name()
        );
        println!("  {}", paint(player, &line));
    }

    if record.is_simple() {
        return;
    }
    for player in Player::BOTH {
        let deck: Vec<String> = record
            .roster(player)
            .iter()
            .enumerate()
            .map(|(index, composite)| format!("{}. {}", index + 1, composite.name()))
            .collect();
        println!("  deck {}: {}", player.number(), deck.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use xscore_core::{MemoryStore, Part, build_composite};

    fn composite(blade: &str) -> Composite {
        build_composite(Part::blade(blade), Part::ratchet("4-60"), Part::bit("Ball"))
    }

    fn drive(
        session: MatchSession,
        history: &mut HistoryStore<MemoryStore>,
        input: &str,
    ) -> MatchSession {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()));
        play(session, history, &mut prompter).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            "1 spin".parse::<Input>().unwrap(),
            Input::Score(Player::One, ScoringType::SpinFinish)
        );
        assert_eq!(
            "2 Extreme".parse::<Input>().unwrap(),
            Input::Score(Player::Two, ScoringType::XtremeFinish)
        );
        assert_eq!(
            "swap 2 3".parse::<Input>().unwrap(),
            Input::Swap(Player::Two, 3)
        );
        assert_eq!("QUIT".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!("status".parse::<Input>().unwrap(), Input::Status);
    }

    #[test]
    fn test_parse_input_errors() {
        assert!("3 spin".parse::<Input>().is_err());
        assert!("1 fly".parse::<Input>().is_err());
        assert!("swap 1 x".parse::<Input>().is_err());
        assert!("hello there friend".parse::<Input>().is_err());
    }

    #[test]
    fn test_pick_deck() {
        let saved = vec![composite("A"), composite("B"), composite("C")];
        let deck = pick_deck(&saved, &[3, 1]).unwrap();
        assert_eq!(deck, vec![saved[2].clone(), saved[0].clone()]);
        assert!(pick_deck(&saved, &[4]).is_err());
        assert!(pick_deck(&saved, &[0]).is_err());
    }

    #[test]
    fn test_tracked_match_is_saved() {
        let deck1 = vec![composite("A1"), composite("A2")];
        let deck2 = vec![composite("B1")];
        let session =
            MatchSession::start("Ann", "Bo", deck1.clone(), deck2, TargetScore::default()).unwrap();
        let mut history = HistoryStore::load(MemoryStore::new());

        let session = drive(
            session,
            &mut history,
            "swap 1 2\n1 xtreme\n\nstatus\n1 over\n1 spin\n1 xtreme\n",
        );

        assert!(session.is_completed());
        assert_eq!(session.record().winner(), Some(Player::One));
        let games = session.record().games();
        assert_eq!(games[0].scoring_history()[0].composite, deck1[1]);
        assert_eq!(games[1].scoring_history()[0].composite, deck1[0]);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_simple_match_is_not_saved() {
        let mut history = HistoryStore::load(MemoryStore::new());
        let session = drive(
            MatchSession::simple(TargetScore::default()),
            &mut history,
            "2 xtreme\n2 burst\n2 xtreme\n2 xtreme\n",
        );

        assert!(session.is_completed());
        assert_eq!(session.record().winner(), Some(Player::Two));
        assert!(history.is_empty());
    }

    #[test]
    fn test_abandoned_match_is_not_saved() {
        let mut history = HistoryStore::load(MemoryStore::new());
        let session = MatchSession::start(
            "Ann",
            "Bo",
            vec![composite("A")],
            vec![composite("B")],
            TargetScore::default(),
        )
        .unwrap();

        let session = drive(
            session,
            &mut history,
            "3 spin\nbogus\nswap 1 9\n1 spin\nquit\n1 xtreme\n",
        );

        assert!(!session.is_completed());
        assert_eq!(session.current_game().map(|g| g.score(Player::One)), Some(1));
        assert!(history.is_empty());
    }
}
