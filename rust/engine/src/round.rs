use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{Action, Discard, Play};
use crate::bid::{Bid, BidAmount};
use crate::cards::{Card, SelectableSuit};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{DealtHand, Event, Score};
use crate::group::Group;
use crate::player::{HasRoles, Player, RoundPlayer, RoundRole};
use crate::trick::Trick;

/// Cards dealt to each seat at the start of a round.
pub const HAND_SIZE: usize = 5;
/// Points for taking a trick. The best trump trick counts twice.
pub const TRICK_VALUE: i32 = 5;

/// Phase of a round. Always derived from the round's data, never stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    Bidding,
    TrumpSelection,
    Discard,
    Tricks,
    /// Everybody passed; the hand is thrown in.
    CompletedNoBidders,
    Completed,
}

impl RoundStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, RoundStatus::Completed | RoundStatus::CompletedNoBidders)
    }
}

/// One deal of the cards, from bidding through the last trick.
#[derive(Debug, Clone)]
pub struct Round {
    players: Group<RoundPlayer>,
    bids: Vec<Bid>,
    trump: Option<SelectableSuit>,
    discards: Vec<Discard>,
    tricks: Vec<Trick>,
    deck: Deck,
}

impl Round {
    /// Seat `players`, tag `dealer` and deal a hand to everybody, starting with
    /// the seat after the dealer.
    pub fn new(
        players: &Group<Player>,
        dealer: &str,
        seed: impl Into<String>,
    ) -> Result<Self, GameError> {
        if !players.contains(dealer) {
            return Err(GameError::PlayerNotFound {
                identifier: dealer.to_string(),
            });
        }
        let mut seats: Group<RoundPlayer> = players
            .iter()
            .map(|p| RoundPlayer::new(p.identifier.clone(), p.automate))
            .collect::<Vec<_>>()
            .into();
        seats.add_role(dealer, RoundRole::Dealer);

        let mut deck = Deck::new(seed);
        for dealt in deal(&seats, dealer, &mut deck)? {
            if let Some(seat) = seats.by_identifier_mut(&dealt.identifier) {
                seat.hand = dealt.cards;
            }
        }
        debug!(dealer, seed = deck.seed(), "round dealt");

        Ok(Self {
            players: seats,
            bids: Vec::new(),
            trump: None,
            discards: Vec::new(),
            tricks: Vec::new(),
            deck,
        })
    }

    pub fn act(&mut self, action: &Action) -> Result<(), GameError> {
        match action {
            Action::Bid { identifier, amount } => self.bid(identifier, *amount),
            Action::Unpass { identifier } => {
                self.unpass(identifier);
                Ok(())
            }
            Action::SelectTrump { identifier, suit } => self.select_trump(identifier, *suit),
            Action::Discard(discard) => self.discard(discard.clone()),
            Action::Play(play) => self.play(play.clone()),
        }
    }

    /// Place a bid for `identifier`.
    ///
    /// A pass made out of turn is remembered as a pre-pass and turned into a
    /// real pass when that player's turn comes round. Any other bid out of
    /// turn is rejected.
    pub fn bid(&mut self, identifier: &str, amount: BidAmount) -> Result<(), GameError> {
        let on_turn = self.status() == RoundStatus::Bidding
            && self.active_player()?.identifier == identifier;

        if on_turn {
            self.place_bid(identifier, amount)?;
            self.resolve_prepasses()
        } else if amount == BidAmount::Pass {
            debug!(identifier, "pre-pass recorded");
            self.players.add_role(identifier, RoundRole::PrePassed);
            Ok(())
        } else {
            Err(GameError::OutOfTurn {
                identifier: identifier.to_string(),
            })
        }
    }

    pub fn unpass(&mut self, identifier: &str) {
        self.players.remove_role(identifier, RoundRole::PrePassed);
    }

    pub fn available_bids(&self, identifier: &str) -> Vec<BidAmount> {
        let Some(player) = self.players.by_identifier(identifier) else {
            return Vec::new();
        };
        if !self.is_bidder(identifier) || player.has_role(RoundRole::PrePassed) {
            return Vec::new();
        }
        let active = self.active_bid();
        let is_dealer = player.has_role(RoundRole::Dealer);
        BidAmount::all()
            .into_iter()
            .filter(|&amount| match active {
                _ if amount == BidAmount::Pass => true,
                None => true,
                Some(current) => amount > current || (is_dealer && amount == current),
            })
            .collect()
    }

    pub fn select_trump(&mut self, identifier: &str, suit: SelectableSuit) -> Result<(), GameError> {
        let status = self.status();
        if status != RoundStatus::TrumpSelection {
            return Err(GameError::WrongPhase {
                action: "select trump",
                status,
            });
        }
        let bidder = self.active_bidder().ok_or(GameError::NoActiveBidder)?;
        if bidder.identifier != identifier {
            return Err(GameError::OutOfTurn {
                identifier: identifier.to_string(),
            });
        }
        debug!(identifier, ?suit, "trump selected");
        self.trump = Some(suit);
        Ok(())
    }

    /// Swap the discarded cards for fresh ones from the deck.
    pub fn discard(&mut self, discard: Discard) -> Result<(), GameError> {
        let status = self.status();
        if status != RoundStatus::Discard {
            return Err(GameError::WrongPhase {
                action: "discard",
                status,
            });
        }
        let active = self.active_player()?;
        if active.identifier != discard.identifier {
            return Err(GameError::OutOfTurn {
                identifier: discard.identifier,
            });
        }
        let distinct = discard
            .cards
            .iter()
            .enumerate()
            .all(|(i, c)| !discard.cards[..i].contains(c));
        if !distinct || !discard.cards.iter().all(|c| active.holds(c)) {
            return Err(GameError::CardNotHeld {
                identifier: discard.identifier,
            });
        }

        let fresh = self.deck.draw(discard.cards.len() as i32)?;
        if let Some(seat) = self.players.by_identifier_mut(&discard.identifier) {
            seat.hand.retain(|c| !discard.cards.contains(c));
            seat.hand.extend(fresh);
        }
        debug!(
            identifier = %discard.identifier,
            count = discard.cards.len(),
            "discard recorded"
        );
        self.discards.push(discard);

        if self.status() == RoundStatus::Tricks {
            self.open_trick();
        }
        Ok(())
    }

    pub fn play(&mut self, play: Play) -> Result<(), GameError> {
        let status = self.status();
        if status != RoundStatus::Tricks {
            return Err(GameError::WrongPhase {
                action: "play",
                status,
            });
        }
        let active = self.active_player()?;
        if active.identifier != play.identifier {
            return Err(GameError::OutOfTurn {
                identifier: play.identifier,
            });
        }
        if !active.holds(&play.card) {
            return Err(GameError::CardNotHeld {
                identifier: play.identifier,
            });
        }
        if !self.playable_cards(&play.identifier).contains(&play.card) {
            return Err(GameError::MustPlayTrump {
                identifier: play.identifier,
            });
        }

        if let Some(seat) = self.players.by_identifier_mut(&play.identifier) {
            seat.hand.retain(|c| *c != play.card);
        }
        debug!(identifier = %play.identifier, card = ?play.card, "card played");
        let trick = self.tricks.last_mut().ok_or(GameError::NoActiveTrick)?;
        trick.plays.push(play);
        let full = trick.plays.len() == self.players.len();

        if full && self.status() == RoundStatus::Tricks {
            self.open_trick();
        }
        Ok(())
    }

    /// Cards `identifier` may legally play into the active trick. While the
    /// trick bleeds, a player holding trump may only play trump.
    pub fn playable_cards(&self, identifier: &str) -> Vec<Card> {
        let Some(player) = self.players.by_identifier(identifier) else {
            return Vec::new();
        };
        let Some(trick) = self.tricks.last() else {
            return player.hand.clone();
        };
        let trumps: Vec<Card> = player
            .hand
            .iter()
            .copied()
            .filter(|c| trick.is_trump(c))
            .collect();
        if trick.bleeding() && !trumps.is_empty() {
            trumps
        } else {
            player.hand.clone()
        }
    }

    pub fn status(&self) -> RoundStatus {
        if !self.tricks.is_empty() && self.players.iter().all(|p| p.hand.is_empty()) {
            RoundStatus::Completed
        } else if self.discards.len() == self.players.len() {
            RoundStatus::Tricks
        } else if self.trump.is_some() {
            RoundStatus::Discard
        } else if self.active_bidder().is_some() {
            RoundStatus::TrumpSelection
        } else if self.bidders().is_empty() {
            RoundStatus::CompletedNoBidders
        } else {
            RoundStatus::Bidding
        }
    }

    pub fn dealer(&self) -> Result<&RoundPlayer, GameError> {
        self.players
            .by_role(RoundRole::Dealer)
            .into_iter()
            .next()
            .ok_or(GameError::NoDealer)
    }

    /// The seat expected to act next.
    pub fn active_player(&self) -> Result<&RoundPlayer, GameError> {
        match self.status() {
            RoundStatus::Bidding => {
                let last = match self.bids.last() {
                    Some(bid) => bid.identifier.as_str(),
                    None => self.dealer()?.identifier.as_str(),
                };
                let seats: Vec<&RoundPlayer> = self
                    .players
                    .iter()
                    .filter(|p| p.identifier == last || self.is_bidder(&p.identifier))
                    .collect();
                next_seat(&seats, last)
            }
            RoundStatus::TrumpSelection => self.active_bidder().ok_or(GameError::NoActiveBidder),
            RoundStatus::Discard => {
                let last = match self.discards.last() {
                    Some(discard) => discard.identifier.as_str(),
                    None => self.dealer()?.identifier.as_str(),
                };
                self.players.after(last)
            }
            RoundStatus::Tricks => {
                let trick = self.active_trick()?;
                match trick.plays.last() {
                    Some(play) => self.players.after(&play.identifier),
                    None if self.tricks.len() == 1 => {
                        let bidder = self.active_bidder().ok_or(GameError::NoActiveBidder)?;
                        self.players.after(&bidder.identifier)
                    }
                    None => {
                        let previous = &self.tricks[self.tricks.len() - 2];
                        let winner = previous.winning_play().ok_or(GameError::NoActiveTrick)?;
                        self.players.by_identifier(&winner.identifier).ok_or_else(|| {
                            GameError::PlayerNotFound {
                                identifier: winner.identifier.clone(),
                            }
                        })
                    }
                }
            }
            status => Err(GameError::NoActivePlayer(status)),
        }
    }

    /// Everybody except the active player. When nobody is active, everybody.
    pub fn inactive_players(&self) -> Vec<&RoundPlayer> {
        let active = self.active_player().ok().map(|p| p.identifier.as_str());
        self.players
            .iter()
            .filter(|p| Some(p.identifier.as_str()) != active)
            .collect()
    }

    /// The highest bid so far, ignoring passes.
    pub fn active_bid(&self) -> Option<BidAmount> {
        self.bids
            .iter()
            .max()
            .map(|b| b.amount)
            .filter(|a| *a != BidAmount::Pass)
    }

    /// Seats that have not passed yet, in seat order.
    pub fn bidders(&self) -> Vec<&RoundPlayer> {
        self.players
            .iter()
            .filter(|p| self.is_bidder(&p.identifier))
            .collect()
    }

    /// The sole remaining bidder, once there is a live bid.
    pub fn active_bidder(&self) -> Option<&RoundPlayer> {
        self.active_bid()?;
        let bidders = self.bidders();
        match bidders.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn active_trick(&self) -> Result<&Trick, GameError> {
        self.tricks.last().ok_or(GameError::NoActiveTrick)
    }

    pub fn trump(&self) -> Option<SelectableSuit> {
        self.trump
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn discards(&self) -> &[Discard] {
        &self.discards
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn players(&self) -> &Group<RoundPlayer> {
        &self.players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn seed(&self) -> &str {
        self.deck.seed()
    }

    /// Points earned this round, one entry per won trick in trick order.
    ///
    /// A bidder who misses their bid loses the bid amount instead of their
    /// tricks; a successful shoot-the-moon replaces the whole list with a
    /// single entry worth 60.
    pub fn scores(&self) -> Result<Vec<Score>, GameError> {
        let status = self.status();
        if status != RoundStatus::Completed {
            return Err(GameError::WrongPhase {
                action: "score",
                status,
            });
        }
        let bidder = self
            .active_bidder()
            .ok_or(GameError::NoActiveBidder)?
            .identifier
            .clone();
        let bid = self.active_bid().ok_or(GameError::NoActiveBidder)?;

        let winners: Vec<(&Play, bool)> = self
            .tricks
            .iter()
            .filter_map(|t| t.winning_play().map(|p| (p, t.is_trump(&p.card))))
            .collect();

        let mut doubled = 0;
        let mut best: Option<u8> = None;
        for (i, (play, trump)) in winners.iter().enumerate() {
            let value = play.card.trump_value();
            if *trump && best.is_none_or(|b| value > b) {
                best = Some(value);
                doubled = i;
            }
        }

        let naive: Vec<Score> = winners
            .iter()
            .enumerate()
            .map(|(i, (play, _))| {
                let value = if i == doubled { TRICK_VALUE * 2 } else { TRICK_VALUE };
                Score::new(play.identifier.clone(), value)
            })
            .collect();

        let bidder_total: i32 = naive
            .iter()
            .filter(|s| s.identifier == bidder)
            .map(|s| s.value)
            .sum();
        let others_scored = naive.iter().any(|s| s.identifier != bidder);

        if bid == BidAmount::ShootTheMoon && !others_scored {
            return Ok(vec![Score::new(bidder, BidAmount::ShootTheMoon.value())]);
        }
        if bidder_total >= bid.value() {
            return Ok(naive);
        }
        let mut missed = vec![Score::new(bidder.clone(), -bid.value())];
        missed.extend(naive.into_iter().filter(|s| s.identifier != bidder));
        Ok(missed)
    }

    /// The round's history as events, rebuilt from its data.
    pub fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Ok(dealer) = self.dealer() {
            let mut replay = Deck::new(self.deck.seed());
            let hands = deal(&self.players, &dealer.identifier, &mut replay).unwrap_or_default();
            events.push(Event::RoundStart {
                dealer: dealer.identifier.clone(),
                hands,
            });
        }

        events.extend(
            self.bids
                .iter()
                .map(|b| Event::Action(Action::bid(b.identifier.clone(), b.amount))),
        );
        if let (Some(suit), Some(bidder)) = (self.trump, self.active_bidder()) {
            events.push(Event::Action(Action::select_trump(
                bidder.identifier.clone(),
                suit,
            )));
        }
        events.extend(
            self.discards
                .iter()
                .map(|d| Event::Action(Action::Discard(d.clone()))),
        );
        for trick in &self.tricks {
            events.push(Event::TrickStart);
            events.extend(
                trick
                    .plays
                    .iter()
                    .map(|p| Event::Action(Action::Play(p.clone()))),
            );
            if trick.plays.len() == self.players.len() {
                if let Some(winner) = trick.winning_play() {
                    events.push(Event::TrickEnd {
                        winner: winner.identifier.clone(),
                    });
                }
            }
        }

        match self.status() {
            RoundStatus::Completed => events.push(Event::RoundEnd {
                scores: self.scores().unwrap_or_default(),
            }),
            RoundStatus::CompletedNoBidders => events.push(Event::RoundEnd { scores: Vec::new() }),
            _ => {}
        }
        events
    }

    fn is_bidder(&self, identifier: &str) -> bool {
        !self
            .bids
            .iter()
            .rev()
            .find(|b| b.identifier == identifier)
            .is_some_and(Bid::is_pass)
    }

    fn place_bid(&mut self, identifier: &str, amount: BidAmount) -> Result<(), GameError> {
        if !self.available_bids(identifier).contains(&amount) {
            return Err(GameError::IllegalBid {
                identifier: identifier.to_string(),
                amount,
            });
        }
        debug!(identifier, %amount, "bid recorded");
        self.bids.push(Bid::new(identifier, amount));
        Ok(())
    }

    fn resolve_prepasses(&mut self) -> Result<(), GameError> {
        for _ in 0..self.players.len() {
            if self.status() != RoundStatus::Bidding {
                break;
            }
            let active = self.active_player()?;
            if !active.has_role(RoundRole::PrePassed) {
                break;
            }
            let identifier = active.identifier.clone();
            self.players.remove_role(&identifier, RoundRole::PrePassed);
            self.place_bid(&identifier, BidAmount::Pass)?;
        }
        Ok(())
    }

    fn open_trick(&mut self) {
        if let Some(trump) = self.trump {
            self.tricks.push(Trick::new(trump));
        }
    }
}

fn deal(
    players: &Group<RoundPlayer>,
    dealer: &str,
    deck: &mut Deck,
) -> Result<Vec<DealtHand>, GameError> {
    let start = players
        .position(dealer)
        .ok_or_else(|| GameError::PlayerNotFound {
            identifier: dealer.to_string(),
        })?;
    let count = players.len();
    let mut hands = Vec::with_capacity(count);
    for offset in 1..=count {
        if let Some(seat) = players.get((start + offset) % count) {
            hands.push(DealtHand {
                identifier: seat.identifier.clone(),
                cards: deck.draw(HAND_SIZE as i32)?,
            });
        }
    }
    Ok(hands)
}

fn next_seat<'a>(seats: &[&'a RoundPlayer], identifier: &str) -> Result<&'a RoundPlayer, GameError> {
    let i = seats
        .iter()
        .position(|p| p.identifier == identifier)
        .ok_or_else(|| GameError::PlayerNotFound {
            identifier: identifier.to_string(),
        })?;
    Ok(seats[(i + 1) % seats.len()])
}
