//! Deck seed inspection command.
//!
//! Every round of a game shuffles its deck from a seed derived from the game
//! seed and the round index. The `rng` command prints the first few so a
//! seed can be checked against recorded games.

use crate::config;
use crate::error::CliError;
use hundredandten_engine::seed::{derive_round_seed, new_game_seed};
use std::io::Write;

const ROUNDS_SHOWN: usize = 5;

/// Handle the rng command.
///
/// Uses `seed`, then the configured seed, then a fresh random seed.
pub fn handle_rng_command(seed: Option<String>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => config::load()?.seed.unwrap_or_else(new_game_seed),
    };
    writeln!(out, "Game seed: {}", seed)?;
    for round in 0..ROUNDS_SHOWN {
        writeln!(out, "Round {} deck seed: {}", round, derive_round_seed(&seed, round))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_command_with_explicit_seed() {
        let mut out = Vec::new();
        handle_rng_command(Some("12345".into()), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Game seed: 12345"));
        assert_eq!(output.lines().count(), ROUNDS_SHOWN + 1);
    }

    #[test]
    fn test_rng_command_produces_deterministic_output() {
        let mut out1 = Vec::new();
        handle_rng_command(Some("42".into()), &mut out1).unwrap();
        let mut out2 = Vec::new();
        handle_rng_command(Some("42".into()), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce same output");
    }

    #[test]
    fn test_rng_command_rounds_differ() {
        let mut out = Vec::new();
        handle_rng_command(Some("rounds".into()), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let seeds: std::collections::HashSet<&str> = output
            .lines()
            .skip(1)
            .filter_map(|l| l.split(": ").nth(1))
            .collect();
        assert_eq!(seeds.len(), ROUNDS_SHOWN);
    }
}
