//! Card, hand, action and event formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements for
//! terminal output. It supports Unicode card symbols with ASCII fallback for
//! terminal environments that don't support Unicode rendering.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use hundredandten_engine::cards::{Card, Rank, SelectableSuit};
//! use hundredandten_cli::formatters::{format_card, format_cards};
//!
//! let five = Card::of(Rank::Five, SelectableSuit::Spades).unwrap();
//! assert!(format_card(&five) == "5♠" || format_card(&five) == "5s");
//! assert_eq!(format_card(&Card::joker()), "Joker");
//! assert!(format_cards(&[five]).starts_with("[5"));
//! ```

use hundredandten_engine::actions::Action;
use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::cards::{Card, Rank, SelectableSuit, Suit};
use hundredandten_engine::events::{Event, Score};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
///
/// The joker's suit has no symbol and is printed as "Joker".
pub fn format_suit(suit: &Suit) -> String {
    let unicode = supports_unicode();
    match suit {
        Suit::Hearts if unicode => "♥",
        Suit::Diamonds if unicode => "♦",
        Suit::Clubs if unicode => "♣",
        Suit::Spades if unicode => "♠",
        Suit::Hearts => "h",
        Suit::Diamonds => "d",
        Suit::Clubs => "c",
        Suit::Spades => "s",
        Suit::Joker => "Joker",
    }
    .to_string()
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Joker => "Joker",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    if card.suit() == Suit::Joker {
        return format_rank(&Rank::Joker);
    }
    format!("{}{}", format_rank(&card.rank()), format_suit(&card.suit()))
}

/// Format cards in bracket notation, like "[A♠ K♥ Q♦]", or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a hand with the 1-based positions used at the `play` prompt.
///
/// # Example
///
/// ```rust
/// use hundredandten_engine::cards::Card;
/// # use hundredandten_cli::formatters::format_hand;
///
/// assert_eq!(format_hand(&[Card::joker()]), "1:Joker");
/// ```
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_selectable_suit(suit: SelectableSuit) -> String {
    match suit {
        SelectableSuit::Hearts => "hearts",
        SelectableSuit::Clubs => "clubs",
        SelectableSuit::Spades => "spades",
        SelectableSuit::Diamonds => "diamonds",
    }
    .to_string()
}

/// Format an Action as a human-readable string, without the acting player.
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Bid { amount, .. } if *amount == BidAmount::Pass => "pass".to_string(),
        Action::Bid { amount, .. } => format!("bid {}", amount),
        Action::Unpass { .. } => "unpass".to_string(),
        Action::SelectTrump { suit, .. } => format!("trump {}", format_selectable_suit(*suit)),
        Action::Discard(discard) => format!("discard {}", format_cards(&discard.cards)),
        Action::Play(play) => format!("play {}", format_card(&play.card)),
    }
}

/// Format scores as "name=value" pairs.
pub fn format_scores(scores: &[Score]) -> String {
    scores
        .iter()
        .map(|s| format!("{}={}", s.identifier, s.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one event as a single line. Dealt hands are left out; callers that
/// may reveal them print them separately.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::GameStart => "Game start".to_string(),
        Event::RoundStart { dealer, .. } => format!("Round start (dealer: {})", dealer),
        Event::Action(action) => format!("{}: {}", action.identifier(), format_action(action)),
        Event::TrickStart => "Trick start".to_string(),
        Event::TrickEnd { winner } => format!("Trick won by {}", winner),
        Event::RoundEnd { scores } if scores.is_empty() => {
            "Round end: nobody bid, deal passes on".to_string()
        }
        Event::RoundEnd { scores } => format!("Round end: {}", format_scores(scores)),
        Event::GameEnd { winner } => format!("Game won by {}", winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: SelectableSuit) -> Card {
        Card::of(rank, suit).unwrap()
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");

        assert_eq!(format_suit(&Suit::Joker), "Joker");
    }

    #[test]
    fn test_format_card() {
        let formatted = format_card(&card(Rank::Ace, SelectableSuit::Spades));
        assert!(formatted == "A♠" || formatted == "As");
        assert_eq!(format_card(&Card::joker()), "Joker");
    }

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn test_format_hand_positions() {
        let hand = [card(Rank::Five, SelectableSuit::Hearts), Card::joker()];
        let formatted = format_hand(&hand);
        assert!(formatted.starts_with("1:5"));
        assert!(formatted.ends_with("2:Joker"));
    }

    #[test]
    fn test_format_actions() {
        assert_eq!(format_action(&Action::bid("a", BidAmount::Pass)), "pass");
        assert_eq!(format_action(&Action::bid("a", BidAmount::Twenty)), "bid 20");
        assert_eq!(format_action(&Action::unpass("a")), "unpass");
        assert_eq!(
            format_action(&Action::select_trump("a", SelectableSuit::Clubs)),
            "trump clubs"
        );
        assert_eq!(format_action(&Action::discard("a", vec![])), "discard []");
        assert_eq!(format_action(&Action::play("a", Card::joker())), "play Joker");
    }

    #[test]
    fn test_format_events() {
        assert_eq!(
            format_event(&Event::Action(Action::bid("bo", BidAmount::Fifteen))),
            "bo: bid 15"
        );
        assert_eq!(
            format_event(&Event::RoundEnd {
                scores: vec![Score::new("a", 15), Score::new("b", -20)]
            }),
            "Round end: a=15 b=-20"
        );
        assert!(format_event(&Event::RoundEnd { scores: vec![] }).contains("nobody bid"));
        assert_eq!(
            format_event(&Event::GameEnd {
                winner: "a".to_string()
            }),
            "Game won by a"
        );
    }
}
