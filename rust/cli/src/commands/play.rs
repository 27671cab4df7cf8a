//! # Play Command
//!
//! Interactive Hundred and Ten against automated opponents.
//!
//! The person sits in the first seat as `you` and deals the first round; the
//! other seats (`ai-1`, `ai-2`, ...) are played by the configured automated
//! player. Every event is printed as it happens, but only your own hand is
//! ever shown.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages
//! - Rejected moves leave the game untouched and re-prompt
//! - `hint` asks the automated player for a suggestion
//! - Graceful quit handling (user can exit with 'q', 'quit' or EOF)

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_event, format_hand, format_scores};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, PlayerInput, parse_player_input, validate_player_count};
use hundredandten_ai::create_ai;
use hundredandten_engine::actions::Action;
use hundredandten_engine::cards::Card;
use hundredandten_engine::game::{Game, GameStatus};
use hundredandten_engine::player::Player;
use hundredandten_engine::policy::DecisionPolicy;
use hundredandten_engine::round::RoundStatus;
use hundredandten_engine::seed::new_game_seed;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::debug;

/// Seat name of the person at the keyboard.
pub const PERSON: &str = "you";

/// Resolved settings for one interactive game.
#[derive(Debug, Clone)]
struct PlaySettings {
    players: usize,
    seed: String,
    ai_version: String,
    automate: bool,
}

/// Handle the play command.
///
/// `players` and `seed` override the configured values. Input is read line
/// by line from `stdin` until the game is won, the user quits, or input ends.
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Some(3), None, &mut input, &mut stdout(), &mut stderr()).unwrap();
/// ```
pub fn handle_play_command(
    players: Option<usize>,
    seed: Option<String>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let settings = PlaySettings {
        players: players.unwrap_or(cfg.players),
        seed: seed.or(cfg.seed).unwrap_or_else(new_game_seed),
        ai_version: cfg.ai_version,
        automate: cfg.automate,
    };
    execute_play_command(settings, stdin, out, err)
}

fn execute_play_command(
    settings: PlaySettings,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let players = validate_player_count(settings.players).map_err(CliError::InvalidInput)?;
    let policy: Arc<dyn DecisionPolicy> = create_ai(&settings.ai_version)
        .map(Arc::from)
        .ok_or_else(|| {
            CliError::Config(format!("unknown ai_version '{}'", settings.ai_version))
        })?;

    let person = if settings.automate {
        Player::automated(PERSON)
    } else {
        Player::new(PERSON)
    };
    let mut seats = vec![person];
    seats.extend((1..players).map(|i| Player::automated(format!("ai-{}", i))));

    writeln!(
        out,
        "play: players={} seed={} ai={}",
        players,
        settings.seed,
        policy.name()
    )?;

    let mut game = Game::new(seats, settings.seed.clone())?.with_policy(policy)?;
    let mut shown = 0usize;

    loop {
        shown = show_new_events(&game, shown, out)?;
        if game.status() == GameStatus::Won {
            break;
        }

        let round = game.active_round();
        let hand = round
            .players()
            .by_identifier(PERSON)
            .map(|p| p.hand.clone())
            .unwrap_or_default();
        writeln!(out, "Hand: {}", format_hand(&hand))?;
        ui::prompt(out, &format!("{}>", phase_prompt(round.status())))?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        match parse_player_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Input(PlayerInput::Hand) => {}
            ParseResult::Input(PlayerInput::Hint) => match game.suggestion() {
                Ok(action) => writeln!(out, "Hint: {}", format_action(&action))?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Input(input) => match to_action(input, &hand) {
                Ok(action) => {
                    debug!(kind = action.kind(), "person acts");
                    if let Err(e) = game.act(action) {
                        ui::write_error(err, &format!("Invalid move: {}", e))?;
                    }
                }
                Err(msg) => ui::write_error(err, &msg)?,
            },
        }
    }

    writeln!(out, "Scores: {}", format_scores(&game.scores()))?;
    writeln!(out, "Rounds played: {}", game.rounds().len())?;
    Ok(())
}

/// Print the events added since the last call and return the new count.
fn show_new_events(game: &Game, shown: usize, out: &mut dyn Write) -> Result<usize, CliError> {
    let events = game.events();
    for event in events.iter().skip(shown) {
        writeln!(out, "{}", format_event(event))?;
    }
    Ok(events.len())
}

fn phase_prompt(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Bidding => "bid",
        RoundStatus::TrumpSelection => "trump",
        RoundStatus::Discard => "discard",
        RoundStatus::Tricks => "play",
        RoundStatus::CompletedNoBidders | RoundStatus::Completed => "done",
    }
}

/// Turn parsed input into a move for the person's seat, resolving 1-based
/// card positions against `hand`.
fn to_action(input: PlayerInput, hand: &[Card]) -> Result<Action, String> {
    let card_at = |n: usize| {
        hand.get(n - 1)
            .copied()
            .ok_or_else(|| format!("No card at position {} (hand has {})", n, hand.len()))
    };
    match input {
        PlayerInput::Bid(amount) => Ok(Action::bid(PERSON, amount)),
        PlayerInput::Unpass => Ok(Action::unpass(PERSON)),
        PlayerInput::Trump(suit) => Ok(Action::select_trump(PERSON, suit)),
        PlayerInput::Discard(positions) => {
            let cards = positions
                .into_iter()
                .map(card_at)
                .collect::<Result<Vec<Card>, String>>()?;
            Ok(Action::discard(PERSON, cards))
        }
        PlayerInput::Play(n) => Ok(Action::play(PERSON, card_at(n)?)),
        PlayerInput::Hand | PlayerInput::Hint => {
            Err("That command does not make a move".to_string())
        }
    }
}
