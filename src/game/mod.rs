//! Core Connect Four game logic: the mutable board, cell marks, and game
//! outcomes.

mod board;
mod mark;

pub use board::{Board, ScopedPlacement, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINE_LENGTH};
pub use mark::Mark;

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}
