//! Hand evaluation heuristics shared by the automated players.

use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::cards::{Card, Rank, SelectableSuit};

/// Penalty applied to a suit whose five is not in hand.
const MISSING_FIVE_PENALTY: i32 = 10;

/// The highest amount worth bidding with `cards`, judged by the strongest suit.
pub fn max_bid(cards: &[Card]) -> BidAmount {
    let (_, value) = most_valuable_suit(cards);
    match value {
        v if v > 50 => BidAmount::ShootTheMoon,
        v if v > 40 => BidAmount::Thirty,
        v if v > 30 => BidAmount::TwentyFive,
        v if v > 25 => BidAmount::Twenty,
        v if v > 20 => BidAmount::Fifteen,
        _ => BidAmount::Pass,
    }
}

/// The suit that would make the strongest trump for `cards`.
pub fn desired_trump(cards: &[Card]) -> SelectableSuit {
    most_valuable_suit(cards).0
}

/// Cards in `cards` that count as trump.
pub fn trumps(cards: &[Card], trump: SelectableSuit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.is_trump(trump)).collect()
}

/// The strongest card to lead: the highest trump, or failing that the
/// highest card of any suit.
pub fn best_card(cards: &[Card], trump: SelectableSuit) -> Option<Card> {
    let trump_cards = trumps(cards, trump);
    if !trump_cards.is_empty() {
        return trump_cards.into_iter().max_by_key(Card::trump_value);
    }
    cards.iter().copied().max_by_key(Card::weak_trump_value)
}

/// The card that is cheapest to throw away: the lowest non-trump, or the
/// lowest trump when only trump is left.
pub fn worst_card(cards: &[Card], trump: SelectableSuit) -> Option<Card> {
    let (trump_cards, others): (Vec<Card>, Vec<Card>) =
        cards.iter().copied().partition(|c| c.is_trump(trump));
    if !others.is_empty() {
        return others.into_iter().min_by_key(Card::weak_trump_value);
    }
    trump_cards.into_iter().min_by_key(Card::trump_value)
}

/// The cheapest card that takes a trick currently won by `to_beat`.
///
/// A trump can only be beaten by a stronger trump. A card of the led suit is
/// beaten by a stronger card of that suit, or by any trump; the suited card is
/// preferred so trump is kept back.
pub fn worst_card_beating(cards: &[Card], to_beat: Card, trump: SelectableSuit) -> Option<Card> {
    let stronger_trump = |c: &Card| {
        c.is_trump(trump) && (!to_beat.is_trump(trump) || c.trump_value() > to_beat.trump_value())
    };
    if !to_beat.is_trump(trump) {
        let suited = cards
            .iter()
            .copied()
            .filter(|c| {
                !c.is_trump(trump)
                    && c.suit() == to_beat.suit()
                    && c.weak_trump_value() > to_beat.weak_trump_value()
            })
            .min_by_key(Card::weak_trump_value);
        if suited.is_some() {
            return suited;
        }
    }
    cards
        .iter()
        .copied()
        .filter(stronger_trump)
        .min_by_key(Card::trump_value)
}

fn suit_value(cards: &[Card], suit: SelectableSuit) -> i32 {
    let trump_cards = trumps(cards, suit);
    let has_five = trump_cards.iter().any(|c| c.rank() == Rank::Five);
    let total: i32 = trump_cards.iter().map(|c| i32::from(c.trump_value())).sum();
    if has_five {
        total
    } else {
        total - MISSING_FIVE_PENALTY
    }
}

fn most_valuable_suit(cards: &[Card]) -> (SelectableSuit, i32) {
    SelectableSuit::all()
        .into_iter()
        .map(|suit| (suit, suit_value(cards, suit)))
        .fold(None, |best: Option<(SelectableSuit, i32)>, item| match best {
            Some(b) if b.1 >= item.1 => Some(b),
            _ => Some(item),
        })
        .unwrap_or((SelectableSuit::Hearts, -MISSING_FIVE_PENALTY))
}
