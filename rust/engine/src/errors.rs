use thiserror::Error;

use crate::bid::BidAmount;
use crate::round::RoundStatus;

/// Every rule violation the engine can report.
///
/// Sequencing and legality variants are caused by bad input from a player.
/// Structural variants (`NoDealer`, `NoActivePlayer`, `NoActiveTrick`,
/// `InvalidDraw`) mean the state was built incorrectly and should be treated
/// as programming errors by callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Player {identifier} cannot act out of turn")]
    OutOfTurn { identifier: String },
    #[error("Cannot {action} while the round is in {status:?}")]
    WrongPhase {
        action: &'static str,
        status: RoundStatus,
    },
    #[error("Player {identifier} cannot place a bid for {amount}")]
    IllegalBid {
        identifier: String,
        amount: BidAmount,
    },
    #[error("Player {identifier} does not hold the requested card(s)")]
    CardNotHeld { identifier: String },
    #[error("Player {identifier} must play trump while the trick is bleeding")]
    MustPlayTrump { identifier: String },
    #[error("The joker suit cannot be selected as trump")]
    UnselectableSuit,
    #[error("Unable to find player {identifier}")]
    PlayerNotFound { identifier: String },
    #[error("No dealer found")]
    NoDealer,
    #[error("Cannot determine active player in {0:?} status")]
    NoActivePlayer(RoundStatus),
    #[error("No active trick found")]
    NoActiveTrick,
    #[error("No active bidder found")]
    NoActiveBidder,
    #[error("Invalid draw: {0}")]
    InvalidDraw(String),
    #[error("A game needs between {min} and {max} players, got {actual}")]
    InvalidPlayerCount { min: usize, max: usize, actual: usize },
    #[error("Player {identifier} cannot join this game")]
    CannotJoin { identifier: String },
    #[error("Only the organizer can start the game")]
    NotOrganizer,
    #[error("The game is already over")]
    GameOver,
    #[error("No decision policy is configured")]
    MissingPolicy,
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}
