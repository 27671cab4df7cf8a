use std::collections::HashSet;

use proptest::prelude::*;

use hundredandten_engine::cards::{Card, CATALOG_SIZE};
use hundredandten_engine::deck::Deck;
use hundredandten_engine::errors::GameError;
use hundredandten_engine::seed::derive_round_seed;

#[test]
fn same_seed_yields_identical_order() {
    let mut d1 = Deck::new("12345");
    let mut d2 = Deck::new("12345");
    assert_eq!(d1.draw(53).unwrap(), d2.draw(53).unwrap());
}

#[test]
fn different_seeds_yield_different_orders() {
    let mut d1 = Deck::new("1");
    let mut d2 = Deck::new("2");
    assert_ne!(
        d1.draw(10).unwrap(),
        d2.draw(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn overdraw_is_detected_across_calls() {
    let mut deck = Deck::new("cumulative");
    for _ in 0..10 {
        deck.draw(5).unwrap();
    }
    assert!(matches!(deck.draw(4), Err(GameError::InvalidDraw(_))));
    assert_eq!(deck.remaining(), 3);
}

#[test]
fn derived_round_decks_are_reproducible() {
    let seed = derive_round_seed("game-seed", 2);
    let mut a = Deck::new(seed.clone());
    let mut b = Deck::new(seed);
    assert_eq!(a.draw(20).unwrap(), b.draw(20).unwrap());
}

proptest! {
    /// Property: the deck is a permutation of the catalog for any seed.
    #[test]
    fn prop_every_seed_permutes_the_catalog(seed in ".{0,32}") {
        let mut deck = Deck::new(seed);
        let cards = deck.draw(CATALOG_SIZE as i32).unwrap();
        let unique: HashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(unique.len(), CATALOG_SIZE);
    }

    /// Property: drawing in chunks yields the same cards as one big draw.
    #[test]
    fn prop_chunked_draws_match_single_draw(seed in "[a-z0-9-]{1,24}", split in 0i32..=53) {
        let mut whole = Deck::new(seed.clone());
        let all = whole.draw(53).unwrap();

        let mut chunked = Deck::new(seed);
        let mut cards = chunked.draw(split).unwrap();
        cards.extend(chunked.draw(53 - split).unwrap());
        prop_assert_eq!(cards, all);
    }

    /// Property: a failed draw never moves the cursor.
    #[test]
    fn prop_failed_draws_keep_cursor(first in 0i32..=53, second in -10i32..=60) {
        let mut deck = Deck::new("cursor");
        deck.draw(first).unwrap();
        let before = deck.pulled();
        match deck.draw(second) {
            Ok(cards) => prop_assert_eq!(deck.pulled(), before + cards.len()),
            Err(_) => prop_assert_eq!(deck.pulled(), before),
        }
    }
}
