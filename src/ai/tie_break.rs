use std::fmt;

use rand::Rng;

use super::search::{LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE};

/// Score values looked for, best first.
const CATEGORIES: [f64; 3] = [WIN_SCORE, NEUTRAL_SCORE, LOSS_SCORE];

/// Policy for choosing among columns that share the best score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
pub enum TieBreak {
    #[serde(rename = "left", alias = "leftmost")]
    #[value(name = "left", alias = "leftmost")]
    Leftmost,
    #[serde(rename = "right", alias = "rightmost")]
    #[value(name = "right", alias = "rightmost")]
    Rightmost,
    #[default]
    #[serde(rename = "random")]
    #[value(name = "random")]
    Random,
}

impl TieBreak {
    /// Pick a column from per-column scores.
    ///
    /// Looks for a win (100), then a neutral column (50), then a losing one
    /// (0). Scores outside those categories (101 for a move that fills the
    /// board) are only considered when none of the three is present, in which
    /// case the highest non-negative score wins. Returns `None` when every
    /// score is negative, which includes legal columns scored -1.
    pub fn pick<R: Rng>(self, scores: &[f64], rng: &mut R) -> Option<usize> {
        for target in CATEGORIES {
            let candidates = matching(scores, target);
            if !candidates.is_empty() {
                return Some(self.select(&candidates, rng));
            }
        }

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if best < 0.0 {
            return None;
        }
        Some(self.select(&matching(scores, best), rng))
    }

    /// Apply the policy to a non-empty list of columns in board order.
    pub(super) fn select<R: Rng>(self, candidates: &[usize], rng: &mut R) -> usize {
        match self {
            TieBreak::Leftmost => candidates[0],
            TieBreak::Rightmost => candidates[candidates.len() - 1],
            TieBreak::Random => candidates[rng.random_range(0..candidates.len())],
        }
    }
}

fn matching(scores: &[f64], target: f64) -> Vec<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score == target)
        .map(|(col, _)| col)
        .collect()
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TieBreak::Leftmost => "left",
            TieBreak::Rightmost => "right",
            TieBreak::Random => "random",
        };
        f.write_str(label)
    }
}
