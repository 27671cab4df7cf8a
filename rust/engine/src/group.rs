use tracing::trace;

use crate::errors::GameError;
use crate::player::{HasRoles, Identified};

/// Seats in play order. Lookups are by identifier; position in the vector is
/// the seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<P> {
    players: Vec<P>,
}

impl<P> Default for Group<P> {
    fn default() -> Self {
        Self {
            players: Vec::new(),
        }
    }
}

impl<P> From<Vec<P>> for Group<P> {
    fn from(players: Vec<P>) -> Self {
        Self { players }
    }
}

impl<P: Identified> Group<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, P> {
        self.players.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.players.get(index)
    }

    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.identifier() == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    pub fn by_identifier(&self, identifier: &str) -> Option<&P> {
        self.players.iter().find(|p| p.identifier() == identifier)
    }

    pub fn by_identifier_mut(&mut self, identifier: &str) -> Option<&mut P> {
        self.players
            .iter_mut()
            .find(|p| p.identifier() == identifier)
    }

    /// Replace the entry with the same identifier in place, or append.
    pub fn upsert(&mut self, player: P) {
        match self.position(player.identifier()) {
            Some(i) => self.players[i] = player,
            None => self.players.push(player),
        }
    }

    pub fn remove(&mut self, identifier: &str) -> Option<P> {
        let i = self.position(identifier)?;
        Some(self.players.remove(i))
    }

    /// The next seat after `identifier`, wrapping around.
    pub fn after(&self, identifier: &str) -> Result<&P, GameError> {
        let i = self
            .position(identifier)
            .ok_or_else(|| GameError::PlayerNotFound {
                identifier: identifier.to_string(),
            })?;
        Ok(&self.players[(i + 1) % self.players.len()])
    }

    pub fn into_vec(self) -> Vec<P> {
        self.players
    }

    pub fn by_role<R: Copy>(&self, role: R) -> Vec<&P>
    where
        P: HasRoles<R>,
    {
        self.players.iter().filter(|p| p.has_role(role)).collect()
    }

    pub fn add_role<R: Copy + std::fmt::Debug>(&mut self, identifier: &str, role: R)
    where
        P: HasRoles<R>,
    {
        match self.by_identifier_mut(identifier) {
            Some(p) => p.add_role(role),
            None => trace!(identifier, ?role, "add_role ignored for unknown player"),
        }
    }

    pub fn remove_role<R: Copy + std::fmt::Debug>(&mut self, identifier: &str, role: R)
    where
        P: HasRoles<R>,
    {
        match self.by_identifier_mut(identifier) {
            Some(p) => p.remove_role(role),
            None => trace!(identifier, ?role, "remove_role ignored for unknown player"),
        }
    }

    /// Move `role` from `source` to `destination`. Nothing changes unless
    /// both identifiers are seated.
    pub fn swap_role<R: Copy + std::fmt::Debug>(&mut self, source: &str, destination: &str, role: R)
    where
        P: HasRoles<R>,
    {
        if !self.contains(source) || !self.contains(destination) {
            trace!(source, destination, ?role, "swap_role ignored for unknown player");
            return;
        }
        self.remove_role(source, role);
        self.add_role(destination, role);
    }
}

impl<'a, P> IntoIterator for &'a Group<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Player, RoundPlayer, RoundRole};

    fn seats() -> Group<RoundPlayer> {
        Group::from(vec![
            RoundPlayer::new("1", false),
            RoundPlayer::new("2", false),
            RoundPlayer::new("3", false),
        ])
    }

    #[test]
    fn after_wraps_around() {
        let g = seats();
        assert_eq!(g.after("1").unwrap().identifier, "2");
        assert_eq!(g.after("3").unwrap().identifier, "1");
    }

    #[test]
    fn after_unknown_or_empty_errors() {
        let g = seats();
        assert!(matches!(g.after("9"), Err(GameError::PlayerNotFound { .. })));
        let empty: Group<Player> = Group::new();
        assert!(empty.after("1").is_err());
    }

    #[test]
    fn upsert_preserves_index() {
        let mut g = seats();
        let mut replaced = RoundPlayer::new("2", true);
        replaced.add_role(RoundRole::Dealer);
        g.upsert(replaced);
        assert_eq!(g.len(), 3);
        assert_eq!(g.position("2"), Some(1));
        assert!(g.get(1).unwrap().automate);

        g.upsert(RoundPlayer::new("4", false));
        assert_eq!(g.position("4"), Some(3));
    }

    #[test]
    fn role_edits_on_unknown_players_are_no_ops() {
        let mut g = seats();
        let before = g.clone();
        g.add_role("nobody", RoundRole::Dealer);
        g.remove_role("nobody", RoundRole::Dealer);
        g.swap_role("nobody", "ghost", RoundRole::Dealer);
        assert_eq!(g, before);
    }

    #[test]
    fn swap_role_moves_tag() {
        let mut g = seats();
        g.add_role("1", RoundRole::Dealer);
        g.swap_role("1", "3", RoundRole::Dealer);
        let dealers: Vec<&str> = g
            .by_role(RoundRole::Dealer)
            .iter()
            .map(|p| p.identifier.as_str())
            .collect();
        assert_eq!(dealers, vec!["3"]);
    }

    #[test]
    fn by_role_keeps_group_order() {
        let mut g = seats();
        g.add_role("3", RoundRole::PrePassed);
        g.add_role("1", RoundRole::PrePassed);
        let ids: Vec<&str> = g
            .by_role(RoundRole::PrePassed)
            .iter()
            .map(|p| p.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
