use serde::{Deserialize, Serialize};

use crate::bid::BidAmount;
use crate::cards::{Card, SelectableSuit};

/// Replace the listed cards from the player's hand with fresh ones.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Discard {
    pub identifier: String,
    pub cards: Vec<Card>,
}

/// A single card played into the active trick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub identifier: String,
    pub card: Card,
}

/// Everything a player can do to a game. Serialized with a `type` tag so a
/// move list reads as `[{"type":"bid","identifier":"a","amount":"FIFTEEN"}, ..]`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Bid {
        identifier: String,
        amount: BidAmount,
    },
    /// Withdraw a pre-pass before the turn comes round.
    Unpass { identifier: String },
    SelectTrump {
        identifier: String,
        suit: SelectableSuit,
    },
    Discard(Discard),
    Play(Play),
}

impl Action {
    pub fn bid(identifier: impl Into<String>, amount: BidAmount) -> Self {
        Action::Bid {
            identifier: identifier.into(),
            amount,
        }
    }

    pub fn unpass(identifier: impl Into<String>) -> Self {
        Action::Unpass {
            identifier: identifier.into(),
        }
    }

    pub fn select_trump(identifier: impl Into<String>, suit: SelectableSuit) -> Self {
        Action::SelectTrump {
            identifier: identifier.into(),
            suit,
        }
    }

    pub fn discard(identifier: impl Into<String>, cards: Vec<Card>) -> Self {
        Action::Discard(Discard {
            identifier: identifier.into(),
            cards,
        })
    }

    pub fn play(identifier: impl Into<String>, card: Card) -> Self {
        Action::Play(Play {
            identifier: identifier.into(),
            card,
        })
    }

    pub fn identifier(&self) -> &str {
        match self {
            Action::Bid { identifier, .. }
            | Action::Unpass { identifier }
            | Action::SelectTrump { identifier, .. } => identifier,
            Action::Discard(d) => &d.identifier,
            Action::Play(p) => &p.identifier,
        }
    }

    /// Short lowercase name, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Bid { .. } => "bid",
            Action::Unpass { .. } => "unpass",
            Action::SelectTrump { .. } => "select trump",
            Action::Discard(_) => "discard",
            Action::Play(_) => "play",
        }
    }
}
