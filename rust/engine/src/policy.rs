use crate::actions::Action;
use crate::errors::GameError;
use crate::round::Round;

/// Chooses the next move for the active player of a round.
///
/// A game consults its policy whenever the active player is automated, and
/// exposes it to people through [`Game::suggestion`](crate::game::Game::suggestion).
pub trait DecisionPolicy: Send + Sync {
    fn suggest(&self, round: &Round) -> Result<Action, GameError>;

    /// Name reported in logs and game records.
    fn name(&self) -> &str;
}
