use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::cards::Card;

/// Points earned by a player, either for one trick or as a running total.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub identifier: String,
    pub value: i32,
}

impl Score {
    pub fn new(identifier: impl Into<String>, value: i32) -> Self {
        Self {
            identifier: identifier.into(),
            value,
        }
    }
}

/// Cards dealt to one seat at the start of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DealtHand {
    pub identifier: String,
    pub cards: Vec<Card>,
}

/// A step in the life of a game. Events are derived from game state on
/// demand and are never stored.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    GameStart,
    RoundStart {
        dealer: String,
        hands: Vec<DealtHand>,
    },
    Action(Action),
    TrickStart,
    TrickEnd {
        winner: String,
    },
    RoundEnd {
        scores: Vec<Score>,
    },
    GameEnd {
        winner: String,
    },
}
