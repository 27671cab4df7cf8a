//! Baseline automated player for Hundred and Ten.
//!
//! Provides a simple rule-based player that can fill empty seats, drive
//! simulations and produce suggestions for people.

use hundredandten_engine::actions::Action;
use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::errors::GameError;
use hundredandten_engine::policy::DecisionPolicy;
use hundredandten_engine::round::{Round, RoundStatus};
use tracing::trace;

use crate::decisions::{best_card, desired_trump, max_bid, worst_card, worst_card_beating};

/// Simple rule-based player.
///
/// # Strategy
///
/// **Bidding:** values every suit as if it were trump and bids the cheapest
/// legal amount while it stays within [`max_bid`]; passes otherwise. A
/// dealer holding the bid counts as the cheapest legal amount.
///
/// **Trump:** names the suit with the highest value.
///
/// **Discard:** throws away every card that is not trump.
///
/// **Tricks:** leads its best card; when following, plays the cheapest card
/// that takes the trick, or its worst card when nothing can.
///
/// Decisions are deterministic, so simulated games replay exactly.
///
/// # Example
///
/// ```rust
/// use hundredandten_ai::baseline::BaselineAI;
/// use hundredandten_engine::policy::DecisionPolicy;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    fn bid(round: &Round, identifier: &str) -> Action {
        let hand = round
            .players()
            .by_identifier(identifier)
            .map(|p| p.hand.as_slice())
            .unwrap_or_default();
        let ceiling = max_bid(hand);
        let amount = round
            .available_bids(identifier)
            .into_iter()
            .find(|a| *a != BidAmount::Pass)
            .filter(|a| *a <= ceiling)
            .unwrap_or(BidAmount::Pass);
        Action::bid(identifier, amount)
    }

    fn play(round: &Round, identifier: &str) -> Result<Action, GameError> {
        let trump = round.trump().ok_or(GameError::WrongPhase {
            action: "play",
            status: round.status(),
        })?;
        let playable = round.playable_cards(identifier);
        let trick = round.active_trick()?;
        let card = match trick.winning_play() {
            None => best_card(&playable, trump),
            Some(winning) => worst_card_beating(&playable, winning.card, trump)
                .or_else(|| worst_card(&playable, trump)),
        };
        let card = card.ok_or_else(|| GameError::CardNotHeld {
            identifier: identifier.to_string(),
        })?;
        Ok(Action::play(identifier, card))
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionPolicy for BaselineAI {
    fn suggest(&self, round: &Round) -> Result<Action, GameError> {
        let active = round.active_player()?;
        let identifier = active.identifier.as_str();
        let action = match round.status() {
            RoundStatus::Bidding => Self::bid(round, identifier),
            RoundStatus::TrumpSelection => {
                Action::select_trump(identifier, desired_trump(&active.hand))
            }
            RoundStatus::Discard => {
                let trump = round.trump().ok_or(GameError::WrongPhase {
                    action: "discard",
                    status: RoundStatus::Discard,
                })?;
                let cards = active
                    .hand
                    .iter()
                    .copied()
                    .filter(|c| !c.is_trump(trump))
                    .collect();
                Action::discard(identifier, cards)
            }
            RoundStatus::Tricks => Self::play(round, identifier)?,
            status => return Err(GameError::NoActivePlayer(status)),
        };
        trace!(identifier, kind = action.kind(), "baseline suggestion");
        Ok(action)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
