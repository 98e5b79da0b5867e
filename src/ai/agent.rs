use crate::game::GameState;

/// Universal interface for computer opponents.
///
/// Agents only ever read the live game state; any probing happens on
/// scratch copies, so selection never mutates the game.
pub trait Agent {
    /// Select the column to drop into. The game must not be terminal.
    fn choose_column(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
