//! Terminal UI: an interactive game view for playing against the search
//! agent, plus a line-oriented headless mode.

mod app;
mod game_view;
pub mod headless;

pub use app::App;

use crate::game::{Mark, Outcome};

/// Status line for a finished game.
pub fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(mark) => format!("{mark} has won the game!"),
        Outcome::Draw => "Tie! Game over.".to_string(),
    }
}

/// Prompt shown while the game is running.
pub fn prompt_message(human: Mark) -> String {
    format!("You play {human}. Select a column.")
}
