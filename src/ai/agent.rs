use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for the player to move. `None` only when no column is
    /// playable.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
