//! # hundredandten-ai: Automated Players for Hundred and Ten
//!
//! Provides automated players that fill seats in a Hundred and Ten game and
//! suggest moves to people. Every player implements the engine's
//! [`DecisionPolicy`] trait, so a game can drive it directly.
//!
//! ## Core Components
//!
//! - [`baseline`] - Rule-based player used for simulations and suggestions
//! - [`decisions`] - Hand evaluation heuristics (bid ceilings, trump choice, card picks)
//! - [`create_ai`] - Factory function for automated players
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hundredandten_ai::create_ai;
//! use hundredandten_engine::game::{Game, GameStatus};
//! use hundredandten_engine::player::Player;
//!
//! let seats = vec![
//!     Player::automated("north"),
//!     Player::automated("east"),
//!     Player::automated("south"),
//! ];
//! let ai = create_ai("baseline").expect("baseline is available");
//! let game = Game::new(seats, "quick-start")
//!     .unwrap()
//!     .with_policy(Arc::from(ai))
//!     .unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```
//!
//! ## AI Types
//!
//! Currently supported AI types:
//! - `"baseline"` - Simple rule-based player

use hundredandten_engine::policy::DecisionPolicy;

pub mod baseline;
pub mod decisions;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

/// Factory function to create automated players by type string.
///
/// Returns `None` for an unknown type; see [`AI_TYPES`] for the accepted names.
///
/// # Example
///
/// ```rust
/// use hundredandten_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn DecisionPolicy>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}
