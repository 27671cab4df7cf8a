//! Seed chaining between a game and its rounds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uuid::Uuid;

/// Derive the deck seed of round `round_index` from the game seed.
///
/// The result is formatted as a version-4 UUID so that round seeds look like
/// freshly generated game seeds, but it is fully determined by its inputs.
pub fn derive_round_seed(game_seed: &str, round_index: usize) -> String {
    let material = format!("deck-seed|{game_seed}|round:{round_index}");
    let key: [u8; 32] = *blake3::hash(material.as_bytes()).as_bytes();
    let mut rng = ChaCha20Rng::from_seed(key);
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// A fresh random game seed.
pub fn new_game_seed() -> String {
    Uuid::new_v4().to_string()
}
