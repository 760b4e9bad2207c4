//! Automated opponent: the agent trait, the fixed-depth column scorer, and
//! the tie-break policies used to turn scores into a move.

mod agent;
mod search;
mod tie_break;

pub use agent::Agent;
pub use search::{SearchAgent, ILLEGAL_SCORE, LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE};
pub use tie_break::TieBreak;
