use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{catalog, Card, CATALOG_SIZE};
use crate::errors::GameError;

/// A seeded permutation of the card catalog with a draw cursor.
///
/// The permutation is a pure function of the seed string, so a deck can be
/// rebuilt at any point of a round from `(seed, pulled)` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    seed: String,
    pulled: usize,
    order: Vec<usize>,
}

impl Deck {
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let order = shuffled_indices(&seed);
        Self {
            seed,
            pulled: 0,
            order,
        }
    }

    /// Rebuild a deck that already had `pulled` cards drawn from it.
    ///
    /// A deck never holds more than the catalog, so `pulled` above
    /// `CATALOG_SIZE` is an `InvalidDraw`.
    pub fn with_pulled(seed: impl Into<String>, pulled: usize) -> Result<Self, GameError> {
        if pulled > CATALOG_SIZE {
            return Err(GameError::InvalidDraw(format!(
                "cannot resume after {} cards, the deck holds {}",
                pulled, CATALOG_SIZE
            )));
        }
        let mut deck = Self::new(seed);
        deck.pulled = pulled;
        Ok(deck)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn remaining(&self) -> usize {
        CATALOG_SIZE - self.pulled
    }

    /// Draw the next `amount` cards and advance the cursor.
    ///
    /// Fails without touching the cursor when `amount` is negative or when
    /// the deck does not hold enough cards.
    pub fn draw(&mut self, amount: i32) -> Result<Vec<Card>, GameError> {
        if amount < 0 {
            return Err(GameError::InvalidDraw(
                "cannot draw previously drawn cards".to_string(),
            ));
        }
        let amount = amount as usize;
        if self.pulled + amount > CATALOG_SIZE {
            return Err(GameError::InvalidDraw("deck is overdrawn".to_string()));
        }
        let cards = self.order[self.pulled..self.pulled + amount]
            .iter()
            .map(|&i| catalog()[i])
            .collect();
        self.pulled += amount;
        Ok(cards)
    }
}

fn shuffled_indices(seed: &str) -> Vec<usize> {
    let key: [u8; 32] = *blake3::hash(seed.as_bytes()).as_bytes();
    let mut rng = ChaCha20Rng::from_seed(key);
    let mut order: Vec<usize> = (0..CATALOG_SIZE).collect();
    order.shuffle(&mut rng);
    order
}
