//! # hundredandten-engine: Hundred and Ten Rules Engine
//!
//! A deterministic rules engine for the trick-taking card game Hundred and
//! Ten. Covers bidding (with pre-passing), trump selection, discard and
//! redraw, trick play with bleeding, round scoring with shoot-the-moon, and
//! multi-round games played to 110 points. Every deal is derived from a seed
//! string, so a game is fully described by its seed, its seats and its moves.
//!
//! ## Core Modules
//!
//! - [`cards`] - The 53-card catalog (Suit, Rank, Card) with trump strengths
//! - [`deck`] - Seeded deck with a draw cursor
//! - [`seed`] - Per-round deck seeds derived from a game seed
//! - [`bid`] - Bid amounts and amount-ordered bids
//! - [`player`] / [`group`] - Seats, role tags and seat-order lookups
//! - [`trick`] - Trick winner and bleeding rules
//! - [`round`] - The round state machine and round scoring
//! - [`game`] - Rounds, dealer rotation, totals and the winner
//! - [`lobby`] - Invitations and seating before a game starts
//! - [`policy`] - The [`DecisionPolicy`](policy::DecisionPolicy) trait for automated seats
//! - [`events`] / [`actions`] - What players do and what happened
//! - [`logger`] - JSONL game records that replay bit-for-bit
//! - [`errors`] - Error types for rule violations
//!
//! ## Quick Start
//!
//! ```rust
//! use hundredandten_engine::actions::Action;
//! use hundredandten_engine::bid::BidAmount;
//! use hundredandten_engine::game::{Game, GameStatus};
//! use hundredandten_engine::player::Player;
//! use hundredandten_engine::round::RoundStatus;
//!
//! let players = vec![Player::new("ann"), Player::new("bo"), Player::new("cy")];
//! let mut game = Game::new(players, "my-seed").unwrap();
//!
//! // ann deals, so bo bids first
//! game.act(Action::bid("bo", BidAmount::Fifteen)).unwrap();
//! game.act(Action::bid("cy", BidAmount::Pass)).unwrap();
//! game.act(Action::bid("ann", BidAmount::Pass)).unwrap();
//! assert_eq!(game.status(), GameStatus::Round(RoundStatus::TrumpSelection));
//! ```
//!
//! ## Deterministic Replay
//!
//! The same seed always deals the same cards, and a move list rebuilds the
//! same game:
//!
//! ```rust
//! use hundredandten_engine::game::Game;
//! use hundredandten_engine::player::Player;
//!
//! let seats = || vec![Player::new("a"), Player::new("b")];
//! let first = Game::new(seats(), "seed").unwrap();
//! let again = Game::with_moves(seats(), "seed", &first.moves()).unwrap();
//! assert_eq!(
//!     first.active_round().players().get(0).unwrap().hand,
//!     again.active_round().players().get(0).unwrap().hand,
//! );
//! ```

pub mod actions;
pub mod bid;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod group;
pub mod lobby;
pub mod logger;
pub mod player;
pub mod policy;
pub mod round;
pub mod seed;
pub mod trick;

pub use game::{DEALER_STREAK_LIMIT, MAX_PLAYERS, MIN_PLAYERS, WINNING_SCORE};
pub use round::{HAND_SIZE, TRICK_VALUE};
