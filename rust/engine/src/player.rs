use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Anything seated in a [`Group`](crate::group::Group). Groups match entries
/// by identifier only, whatever else the entry carries.
pub trait Identified {
    fn identifier(&self) -> &str;
}

/// Entries that carry a set of role tags.
pub trait HasRoles<R> {
    fn has_role(&self, role: R) -> bool;
    fn add_role(&mut self, role: R);
    fn remove_role(&mut self, role: R);
}

/// Role tags a player can carry within a single round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RoundRole {
    Dealer,
    /// Passed ahead of their turn; resolved into a real pass when the turn comes.
    PrePassed,
}

/// Role tags a person can carry in a lobby.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameRole {
    Player,
    Organizer,
    Invitee,
}

/// A seat at the game level.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub identifier: String,
    #[serde(default)]
    pub automate: bool,
}

impl Player {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            automate: false,
        }
    }

    pub fn automated(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            automate: true,
        }
    }
}

impl Identified for Player {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// A seat within one round: roles plus the cards currently held.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundPlayer {
    pub identifier: String,
    pub roles: BTreeSet<RoundRole>,
    pub hand: Vec<Card>,
    pub automate: bool,
}

impl RoundPlayer {
    pub fn new(identifier: impl Into<String>, automate: bool) -> Self {
        Self {
            identifier: identifier.into(),
            roles: BTreeSet::new(),
            hand: Vec::new(),
            automate,
        }
    }

    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }
}

impl Identified for RoundPlayer {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl HasRoles<RoundRole> for RoundPlayer {
    fn has_role(&self, role: RoundRole) -> bool {
        self.roles.contains(&role)
    }

    fn add_role(&mut self, role: RoundRole) {
        self.roles.insert(role);
    }

    fn remove_role(&mut self, role: RoundRole) {
        self.roles.remove(&role);
    }
}

/// Someone known to a lobby: a player, the organizer, or an invitee.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub identifier: String,
    pub roles: BTreeSet<GameRole>,
    #[serde(default)]
    pub automate: bool,
}

impl Person {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            roles: BTreeSet::new(),
            automate: false,
        }
    }
}

impl Identified for Person {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl HasRoles<GameRole> for Person {
    fn has_role(&self, role: GameRole) -> bool {
        self.roles.contains(&role)
    }

    fn add_role(&mut self, role: GameRole) {
        self.roles.insert(role);
    }

    fn remove_role(&mut self, role: GameRole) {
        self.roles.remove(&role);
    }
}
