//! Input parsing and validation for interactive commands.
//!
//! This module turns the lines typed during `play` into moves, and validates
//! table sizes shared by every command that seats players.

use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::cards::SelectableSuit;
use hundredandten_engine::{MAX_PLAYERS, MIN_PLAYERS};

/// A move or request typed at the `play` prompt.
///
/// Card positions are 1-based, matching how hands are printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Bid(BidAmount),
    Unpass,
    Trump(SelectableSuit),
    Discard(Vec<usize>),
    Play(usize),
    /// Show the current hand again
    Hand,
    /// Ask the automated player what it would do
    Hint,
}

/// Result type for parsing user input at the `play` prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid input
    Input(PlayerInput),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

const USAGE: &str =
    "Valid commands: bid <15|20|25|30|60>, pass, unpass, trump <suit>, discard <n..>, play <n>, hand, hint, q";

/// Parse user input into a [`PlayerInput`] or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "bid 20", "bid pass" or "pass" → Bid
/// - "unpass" → Unpass
/// - "trump hearts" (or h, c, s, d) → Trump
/// - "discard 1 3" → Discard those positions; "discard" alone keeps the hand
/// - "play 2" → Play that position
/// - "hand" → Hand
/// - "hint" → Hint
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use hundredandten_cli::validation::{parse_player_input, ParseResult, PlayerInput};
/// use hundredandten_engine::bid::BidAmount;
///
/// assert_eq!(
///     parse_player_input("bid 20"),
///     ParseResult::Input(PlayerInput::Bid(BidAmount::Twenty))
/// );
/// assert_eq!(
///     parse_player_input("discard 1 4"),
///     ParseResult::Input(PlayerInput::Discard(vec![1, 4]))
/// );
/// assert_eq!(parse_player_input("q"), ParseResult::Quit);
///
/// match parse_player_input("raise 10") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    let args = &parts[1..];

    match command {
        "q" | "quit" => ParseResult::Quit,
        "pass" => ParseResult::Input(PlayerInput::Bid(BidAmount::Pass)),
        "unpass" => ParseResult::Input(PlayerInput::Unpass),
        "hand" => ParseResult::Input(PlayerInput::Hand),
        "hint" => ParseResult::Input(PlayerInput::Hint),
        "bid" => match args.first() {
            None => ParseResult::Invalid("Bid requires an amount (e.g., 'bid 20')".to_string()),
            Some(&"pass") => ParseResult::Input(PlayerInput::Bid(BidAmount::Pass)),
            Some(raw) => match parse_bid_amount(raw) {
                Some(amount) => ParseResult::Input(PlayerInput::Bid(amount)),
                None => ParseResult::Invalid(format!(
                    "Invalid bid amount '{}'. Amounts: 15, 20, 25, 30, 60",
                    raw
                )),
            },
        },
        "trump" => match args.first().map(|s| parse_suit(s)) {
            Some(Some(suit)) => ParseResult::Input(PlayerInput::Trump(suit)),
            Some(None) => ParseResult::Invalid(
                "Unknown suit. Choose hearts, clubs, spades or diamonds".to_string(),
            ),
            None => ParseResult::Invalid("Trump requires a suit (e.g., 'trump hearts')".to_string()),
        },
        "discard" => match parse_positions(args) {
            Ok(positions) => ParseResult::Input(PlayerInput::Discard(positions)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "play" => match args {
            [raw] => match parse_position(raw) {
                Ok(n) => ParseResult::Input(PlayerInput::Play(n)),
                Err(msg) => ParseResult::Invalid(msg),
            },
            _ => ParseResult::Invalid("Play requires one card position (e.g., 'play 2')".to_string()),
        },
        _ => ParseResult::Invalid(format!("Unrecognized command '{}'. {}", command, USAGE)),
    }
}

/// Bid amounts by their printed value; "shoot" is accepted for shooting the moon.
pub fn parse_bid_amount(raw: &str) -> Option<BidAmount> {
    if raw == "shoot" {
        return Some(BidAmount::ShootTheMoon);
    }
    raw.parse::<i32>()
        .ok()
        .and_then(BidAmount::from_value)
        .filter(|amount| *amount != BidAmount::Pass)
}

pub fn parse_suit(raw: &str) -> Option<SelectableSuit> {
    match raw.to_ascii_lowercase().as_str() {
        "h" | "heart" | "hearts" => Some(SelectableSuit::Hearts),
        "c" | "club" | "clubs" => Some(SelectableSuit::Clubs),
        "s" | "spade" | "spades" => Some(SelectableSuit::Spades),
        "d" | "diamond" | "diamonds" => Some(SelectableSuit::Diamonds),
        _ => None,
    }
}

fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Invalid card position '{}'", raw)),
    }
}

fn parse_positions(args: &[&str]) -> Result<Vec<usize>, String> {
    let mut positions = Vec::with_capacity(args.len());
    for raw in args {
        let n = parse_position(raw)?;
        if positions.contains(&n) {
            return Err(format!("Card position {} listed twice", n));
        }
        positions.push(n);
    }
    Ok(positions)
}

/// Validate a table size.
///
/// # Returns
///
/// * `Ok(n)` - The count is between the engine's minimum and maximum
/// * `Err(String)` - Error message naming the allowed range
pub fn validate_player_count(players: usize) -> Result<usize, String> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(players)
    } else {
        Err(format!(
            "players must be between {} and {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, players
        ))
    }
}

/// Check a game id has the `YYYYMMDD-NNNNNN` shape used by game records.
pub fn is_valid_game_id(id: &str) -> bool {
    id.len() == 15
        && id.is_ascii()
        && id[0..8].chars().all(|c| c.is_ascii_digit())
        && &id[8..9] == "-"
        && id[9..].chars().all(|c| c.is_ascii_digit())
}
