use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::actions::Action;
use crate::errors::GameError;
use crate::events::{Event, Score};
use crate::group::Group;
use crate::player::Player;
use crate::policy::DecisionPolicy;
use crate::round::{Round, RoundStatus};
use crate::seed::{derive_round_seed, new_game_seed};

/// Running total a player must reach to win.
pub const WINNING_SCORE: i32 = 110;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
/// Consecutive thrown-in deals a dealer keeps before the deal moves on.
pub const DEALER_STREAK_LIMIT: usize = 3;

/// Where a game stands: inside a round, or finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    Round(RoundStatus),
    Won,
}

/// A match of consecutive rounds played until someone reaches 110.
///
/// Holds the seat order, the game seed that every round seed is derived from,
/// and the rounds played so far. The last round is always the active one.
#[derive(Clone)]
pub struct Game {
    players: Group<Player>,
    seed: String,
    rounds: Vec<Round>,
    /// Every action applied, automated ones included, in order.
    moves: Vec<Action>,
    policy: Option<Arc<dyn DecisionPolicy>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("seed", &self.seed)
            .field("rounds", &self.rounds.len())
            .field("policy", &self.policy.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl Game {
    pub fn new(
        players: impl Into<Group<Player>>,
        seed: impl Into<String>,
    ) -> Result<Self, GameError> {
        Self::with_moves(players, seed, &[])
    }

    /// A game with a random seed.
    pub fn random(players: impl Into<Group<Player>>) -> Result<Self, GameError> {
        Self::new(players, new_game_seed())
    }

    /// Rebuild a game from its seed and the moves made so far. The moves are
    /// applied as recorded, without consulting any policy in between.
    pub fn with_moves(
        players: impl Into<Group<Player>>,
        seed: impl Into<String>,
        moves: &[Action],
    ) -> Result<Self, GameError> {
        let players = players.into();
        if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                actual: players.len(),
            });
        }
        let first_dealer = players
            .get(0)
            .map(|p| p.identifier.clone())
            .ok_or(GameError::NoDealer)?;

        let mut game = Self {
            players,
            seed: seed.into(),
            rounds: Vec::new(),
            moves: Vec::new(),
            policy: None,
        };
        game.new_round(&first_dealer)?;
        for action in moves {
            game.apply(action)?;
        }
        Ok(game)
    }

    /// Install the policy used for automated seats and let them play until a
    /// person is due to act.
    pub fn with_policy(mut self, policy: Arc<dyn DecisionPolicy>) -> Result<Self, GameError> {
        self.policy = Some(policy);
        self.automate()?;
        Ok(self)
    }

    /// Apply `action`, start the next round when this one is over, then let
    /// automated seats play. Nothing changes when any step fails.
    pub fn act(&mut self, action: Action) -> Result<(), GameError> {
        if self.winner().is_some() {
            return Err(GameError::GameOver);
        }
        let snapshot = (self.rounds.clone(), self.moves.len());
        let result = self.apply(&action).and_then(|_| self.automate());
        if let Err(err) = result {
            warn!(game_seed = %self.seed, identifier = action.identifier(), %err, "action rejected");
            self.rounds = snapshot.0;
            self.moves.truncate(snapshot.1);
            return Err(err);
        }
        if let Some(winner) = self.winner() {
            info!(game_seed = %self.seed, winner = %winner.identifier, rounds = self.rounds.len(), "game won");
        }
        Ok(())
    }

    /// What the installed policy would do in the active player's position.
    pub fn suggestion(&self) -> Result<Action, GameError> {
        if self.winner().is_some() {
            return Err(GameError::GameOver);
        }
        let policy = self.policy.as_ref().ok_or(GameError::MissingPolicy)?;
        policy.suggest(self.active_round())
    }

    pub fn status(&self) -> GameStatus {
        if self.winner().is_some() {
            GameStatus::Won
        } else {
            GameStatus::Round(self.active_round().status())
        }
    }

    pub fn players(&self) -> &Group<Player> {
        &self.players
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn active_round(&self) -> &Round {
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.policy.as_ref().map(|p| p.name())
    }

    /// Running totals after every scored trick, oldest first.
    pub fn score_history(&self) -> Vec<Score> {
        self.history_until(self.rounds.len())
    }

    /// Current total of every player, in seat order.
    pub fn scores(&self) -> Vec<Score> {
        self.totals_until(self.rounds.len())
    }

    /// Totals at the start of every round, plus the final totals once the last
    /// round is complete.
    pub fn scores_by_round(&self) -> Vec<Vec<Score>> {
        let finished = usize::from(self.active_round().status() == RoundStatus::Completed);
        (0..self.rounds.len() + finished)
            .map(|upto| self.totals_until(upto))
            .collect()
    }

    /// The player who reached the winning score, if the game is over.
    ///
    /// When several players cross the line in the same round the bidder wins
    /// if they are among them, otherwise whoever crossed first.
    pub fn winner(&self) -> Option<&Player> {
        let round = self.active_round();
        if round.status() != RoundStatus::Completed {
            return None;
        }
        let bidder = round.active_bidder().map(|p| p.identifier.as_str());
        let identifier = resolve_winner(&self.score_history(), bidder)?;
        self.players.by_identifier(&identifier)
    }

    /// The actions applied so far, as they were submitted. Unlike the
    /// event log this includes pre-passes and unpasses, so feeding it to
    /// [`Game::with_moves`] rebuilds the exact same state.
    pub fn moves(&self) -> &[Action] {
        &self.moves
    }

    pub fn events(&self) -> Vec<Event> {
        let mut events = vec![Event::GameStart];
        events.extend(self.rounds.iter().flat_map(Round::events));
        if let Some(winner) = self.winner() {
            events.push(Event::GameEnd {
                winner: winner.identifier.clone(),
            });
        }
        events
    }

    fn apply(&mut self, action: &Action) -> Result<(), GameError> {
        let index = self.rounds.len() - 1;
        self.rounds[index].act(action)?;
        self.moves.push(action.clone());
        debug!(
            game_seed = %self.seed,
            round = index,
            identifier = action.identifier(),
            kind = action.kind(),
            "action applied"
        );
        match action {
            Action::Bid { .. } => self.end_bid(),
            Action::Play(_) => self.end_play(),
            _ => Ok(()),
        }
    }

    fn automate(&mut self) -> Result<(), GameError> {
        let Some(policy) = self.policy.clone() else {
            return Ok(());
        };
        while let GameStatus::Round(_) = self.status() {
            let round = self.active_round();
            match round.active_player() {
                Ok(player) if player.automate => {}
                _ => break,
            }
            let action = policy.suggest(round)?;
            self.apply(&action)?;
        }
        Ok(())
    }

    fn end_bid(&mut self) -> Result<(), GameError> {
        if self.status() != GameStatus::Round(RoundStatus::CompletedNoBidders) {
            return Ok(());
        }
        let dealer = self.active_round().dealer()?.identifier.clone();
        let streak = self.rounds.len() >= DEALER_STREAK_LIMIT
            && self.rounds[self.rounds.len() - DEALER_STREAK_LIMIT..]
                .iter()
                .all(|r| r.dealer().is_ok_and(|d| d.identifier == dealer));
        let next = if streak {
            self.players.after(&dealer)?.identifier.clone()
        } else {
            dealer
        };
        self.new_round(&next)
    }

    fn end_play(&mut self) -> Result<(), GameError> {
        if self.status() != GameStatus::Round(RoundStatus::Completed) {
            return Ok(());
        }
        let dealer = self.active_round().dealer()?.identifier.clone();
        let next = self.players.after(&dealer)?.identifier.clone();
        self.new_round(&next)
    }

    fn new_round(&mut self, dealer: &str) -> Result<(), GameError> {
        let index = self.rounds.len();
        let seed = derive_round_seed(&self.seed, index);
        debug!(game_seed = %self.seed, round = index, dealer, "starting round");
        self.rounds.push(Round::new(&self.players, dealer, seed)?);
        Ok(())
    }

    fn history_until(&self, upto: usize) -> Vec<Score> {
        let mut totals: Vec<Score> = Vec::new();
        let mut history = Vec::new();
        for round in self.rounds[..upto].iter() {
            if round.status() != RoundStatus::Completed {
                continue;
            }
            for score in round.scores().unwrap_or_default() {
                let total = match totals.iter_mut().find(|t| t.identifier == score.identifier) {
                    Some(t) => {
                        t.value += score.value;
                        t.value
                    }
                    None => {
                        totals.push(score.clone());
                        score.value
                    }
                };
                history.push(Score::new(score.identifier, total));
            }
        }
        history
    }

    fn totals_until(&self, upto: usize) -> Vec<Score> {
        let history = self.history_until(upto);
        self.players
            .iter()
            .map(|p| {
                let value = history
                    .iter()
                    .rev()
                    .find(|s| s.identifier == p.identifier)
                    .map_or(0, |s| s.value);
                Score::new(p.identifier.clone(), value)
            })
            .collect()
    }
}

/// Pick the winner from a score history: the bidder if they reached the
/// winning score, otherwise the first history entry that did.
pub fn resolve_winner(history: &[Score], bidder: Option<&str>) -> Option<String> {
    let mut reached = history.iter().filter(|s| s.value >= WINNING_SCORE);
    let first = reached.clone().next()?;
    match bidder {
        Some(b) if reached.any(|s| s.identifier == b) => Some(b.to_string()),
        _ => Some(first.identifier.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bid::BidAmount;

    fn four() -> Vec<Player> {
        ["1", "2", "3", "4"].iter().map(|id| Player::new(*id)).collect()
    }

    fn pass_round(game: &mut Game) {
        for _ in 0..game.players().len() {
            let active = game.active_round().active_player().unwrap().identifier.clone();
            game.act(Action::bid(active, BidAmount::Pass)).unwrap();
        }
    }

    #[test]
    fn player_count_is_bounded() {
        let one = vec![Player::new("solo")];
        assert!(matches!(
            Game::new(one, "s"),
            Err(GameError::InvalidPlayerCount { actual: 1, .. })
        ));
        let five: Vec<Player> = (0..5).map(|i| Player::new(i.to_string())).collect();
        assert!(Game::new(five, "s").is_err());
    }

    #[test]
    fn first_round_is_dealt_by_first_seat() {
        let game = Game::new(four(), "seed").unwrap();
        assert_eq!(game.rounds().len(), 1);
        assert_eq!(game.active_round().dealer().unwrap().identifier, "1");
        assert_eq!(game.active_round().seed(), derive_round_seed("seed", 0));
        assert_eq!(game.status(), GameStatus::Round(RoundStatus::Bidding));
    }

    #[test]
    fn dealer_keeps_thrown_in_deals_until_third_in_a_row() {
        let mut game = Game::new(four(), "peat").unwrap();
        pass_round(&mut game);
        assert_eq!(game.rounds().len(), 2);
        assert_eq!(game.active_round().dealer().unwrap().identifier, "1");
        pass_round(&mut game);
        assert_eq!(game.active_round().dealer().unwrap().identifier, "1");
        pass_round(&mut game);
        assert_eq!(game.rounds().len(), 4);
        assert_eq!(game.active_round().dealer().unwrap().identifier, "2");
        assert_eq!(game.active_round().seed(), derive_round_seed("peat", 3));
    }

    #[test]
    fn failed_actions_leave_the_game_untouched() {
        let mut game = Game::new(four(), "atomic").unwrap();
        let before = game.moves().to_vec();
        let err = game.act(Action::bid("4", BidAmount::Twenty)).unwrap_err();
        assert!(matches!(err, GameError::OutOfTurn { .. }));
        assert_eq!(game.moves(), before);
        assert_eq!(game.rounds().len(), 1);
    }

    #[test]
    fn suggestion_needs_a_policy() {
        let game = Game::new(four(), "nopolicy").unwrap();
        assert_eq!(game.suggestion().unwrap_err(), GameError::MissingPolicy);
    }

    #[test]
    fn moves_replay_to_the_same_game() {
        let mut game = Game::new(four(), "replay").unwrap();
        game.act(Action::bid("3", BidAmount::Pass)).unwrap();
        game.act(Action::bid("2", BidAmount::Fifteen)).unwrap();
        let rebuilt = Game::with_moves(four(), "replay", &game.moves()).unwrap();
        assert_eq!(rebuilt.moves(), game.moves());
        assert_eq!(rebuilt.active_round().active_player().unwrap().identifier, "4");
    }

    #[test]
    fn bidder_wins_a_disputed_finish() {
        let history = vec![
            Score::new("a", 100),
            Score::new("b", 112),
            Score::new("a", 115),
        ];
        assert_eq!(resolve_winner(&history, Some("a")), Some("a".to_string()));
        assert_eq!(resolve_winner(&history, Some("c")), Some("b".to_string()));
        assert_eq!(resolve_winner(&history, None), Some("b".to_string()));
        assert_eq!(resolve_winner(&history[..1], Some("a")), None);
    }
}
