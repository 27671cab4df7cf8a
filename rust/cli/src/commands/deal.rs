//! Deal command handler.
//!
//! Shows the first deal of a seeded game: the round's deck seed, the dealer
//! and every seat's hand. The same seed always prints the same deal.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::validate_player_count;
use hundredandten_engine::game::Game;
use hundredandten_engine::player::Player;
use hundredandten_engine::seed::new_game_seed;
use std::io::Write;

/// Handle the deal command.
///
/// Seats are named `p1..pN` with `p1` dealing.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(Some("42".into()), Some(3), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<String>,
    players: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (seed, players) = match (seed, players) {
        (Some(s), Some(p)) => (s, p),
        (seed, players) => {
            let cfg = config::load()?;
            (
                seed.or(cfg.seed).unwrap_or_else(new_game_seed),
                players.unwrap_or(cfg.players),
            )
        }
    };
    let players = validate_player_count(players).map_err(CliError::InvalidInput)?;

    let seats: Vec<Player> = (1..=players).map(|i| Player::new(format!("p{}", i))).collect();
    let game = Game::new(seats, seed.clone())?;
    let round = game.active_round();

    writeln!(out, "Game seed: {}", seed)?;
    writeln!(out, "Deck seed: {}", round.seed())?;
    writeln!(out, "Dealer: {}", round.dealer()?.identifier)?;
    for player in round.players() {
        writeln!(out, "{}: {}", player.identifier, format_cards(&player.hand))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some("999".into()), Some(3), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6, "seed, deck seed, dealer and three hands");
        assert_eq!(lines[0], "Game seed: 999");
        assert!(lines[1].starts_with("Deck seed: "));
        assert_eq!(lines[2], "Dealer: p1");
        assert!(lines[3].starts_with("p1: ["));
        assert!(lines[5].starts_with("p3: ["));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some("12345".into()), Some(4), &mut out1).unwrap();
        handle_deal_command(Some("12345".into()), Some(4), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_rejects_table_size() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some("1".into()), Some(7), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
