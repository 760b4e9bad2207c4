use crate::error::SearchError;
use crate::game::{Board, Mark};

/// Interface for automated players.
pub trait Agent {
    /// Pick a column for `self.side()` on `board`.
    ///
    /// The board may be mutated while the agent thinks but must be left
    /// exactly as it was found once this returns.
    fn select_move(&mut self, board: &mut Board) -> Result<usize, SearchError>;

    /// The mark this agent plays.
    fn side(&self) -> Mark;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
