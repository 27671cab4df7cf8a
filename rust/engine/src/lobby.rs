use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GameError;
use crate::game::{Game, MAX_PLAYERS};
use crate::group::Group;
use crate::player::{GameRole, HasRoles, Person, Player};
use crate::seed::new_game_seed;

/// Who may join a lobby without an invitation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Accessibility {
    Public,
    Private,
}

/// People gathering for a game before it starts.
#[derive(Debug, Clone)]
pub struct Lobby {
    people: Group<Person>,
    accessibility: Accessibility,
    seed: String,
}

impl Lobby {
    pub fn new(organizer: impl Into<String>, accessibility: Accessibility) -> Self {
        Self::with_seed(organizer, accessibility, new_game_seed())
    }

    pub fn with_seed(
        organizer: impl Into<String>,
        accessibility: Accessibility,
        seed: impl Into<String>,
    ) -> Self {
        let mut person = Person::new(organizer);
        person.add_role(GameRole::Organizer);
        person.add_role(GameRole::Player);
        Self {
            people: Group::from(vec![person]),
            accessibility,
            seed: seed.into(),
        }
    }

    pub fn people(&self) -> &Group<Person> {
        &self.people
    }

    pub fn players(&self) -> Vec<&Person> {
        self.people.by_role(GameRole::Player)
    }

    pub fn invitees(&self) -> Vec<&Person> {
        self.people.by_role(GameRole::Invitee)
    }

    pub fn organizer(&self) -> Option<&Person> {
        self.people.by_role(GameRole::Organizer).into_iter().next()
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Invite `invitee`. Only players already seated may invite.
    pub fn invite(&mut self, inviter: &str, invitee: &str) -> Result<(), GameError> {
        let seated = self
            .people
            .by_identifier(inviter)
            .is_some_and(|p| p.has_role(GameRole::Player));
        if !seated {
            return Err(GameError::PlayerNotFound {
                identifier: inviter.to_string(),
            });
        }
        self.grant(invitee, GameRole::Invitee, None);
        debug!(inviter, invitee, "invitation sent");
        Ok(())
    }

    pub fn join(&mut self, identifier: &str) -> Result<(), GameError> {
        self.seat(identifier, false)
    }

    /// Seat a computer-controlled player.
    pub fn join_automated(&mut self, identifier: &str) -> Result<(), GameError> {
        self.seat(identifier, true)
    }

    /// Give up a seat. Invitations are kept, so the person may come back.
    pub fn leave(&mut self, identifier: &str) {
        self.people.remove_role(identifier, GameRole::Player);
        if self
            .people
            .by_identifier(identifier)
            .is_some_and(|p| p.roles.is_empty())
        {
            self.people.remove(identifier);
        }
    }

    /// Start the game with the seated players, in seating order.
    pub fn start(&self, identifier: &str) -> Result<Game, GameError> {
        let is_organizer = self
            .organizer()
            .is_some_and(|p| p.identifier == identifier);
        if !is_organizer {
            return Err(GameError::NotOrganizer);
        }
        let players: Vec<Player> = self
            .players()
            .into_iter()
            .map(|p| Player {
                identifier: p.identifier.clone(),
                automate: p.automate,
            })
            .collect();
        Game::new(players, self.seed.clone())
    }

    fn seat(&mut self, identifier: &str, automate: bool) -> Result<(), GameError> {
        let already = self
            .people
            .by_identifier(identifier)
            .is_some_and(|p| p.has_role(GameRole::Player));
        if already {
            return Ok(());
        }
        let invited = self.people.by_identifier(identifier).is_some_and(|p| {
            p.has_role(GameRole::Invitee) || p.has_role(GameRole::Organizer)
        });
        let below_cap = self.players().len() < MAX_PLAYERS;
        if !below_cap || !(self.accessibility == Accessibility::Public || invited) {
            return Err(GameError::CannotJoin {
                identifier: identifier.to_string(),
            });
        }
        self.grant(identifier, GameRole::Player, Some(automate));
        debug!(identifier, automate, "player joined");
        Ok(())
    }

    fn grant(&mut self, identifier: &str, role: GameRole, automate: Option<bool>) {
        let mut person = self
            .people
            .by_identifier(identifier)
            .cloned()
            .unwrap_or_else(|| Person::new(identifier));
        person.add_role(role);
        if let Some(automate) = automate {
            person.automate = automate;
        }
        self.people.upsert(person);
    }
}
