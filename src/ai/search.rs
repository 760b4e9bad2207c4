use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;
use super::tie_break::TieBreak;
use crate::config::AgentConfig;
use crate::error::SearchError;
use crate::game::{Board, Mark};

/// Score of a move that wins on the spot.
pub const WIN_SCORE: f64 = 100.0;
/// Score of a move whose consequences lie beyond the search horizon.
pub const NEUTRAL_SCORE: f64 = 50.0;
/// Score of a move that hands the opponent an immediate win.
pub const LOSS_SCORE: f64 = 0.0;
/// Score of a column that cannot be played.
pub const ILLEGAL_SCORE: f64 = -1.0;

/// Fixed-depth look-ahead player.
///
/// Every column is scored by playing it on the live board, recursing into
/// the opponent's replies, and reflecting the opponent's best reply score
/// (`100 - best`). There is no pruning and no evaluation beyond "win" or
/// "unknown", so work grows as `width^ply`.
pub struct SearchAgent {
    side: Mark,
    tie_break: TieBreak,
    ply: usize,
    rng: StdRng,
}

impl SearchAgent {
    pub fn new(side: Mark, tie_break: TieBreak, ply: usize) -> Self {
        Self::with_rng(side, tie_break, ply, StdRng::from_os_rng())
    }

    /// Deterministic agent: `Random` tie-breaks replay identically for the
    /// same seed.
    pub fn with_seed(side: Mark, tie_break: TieBreak, ply: usize, seed: u64) -> Self {
        Self::with_rng(side, tie_break, ply, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(side: Mark, tie_break: TieBreak, ply: usize, rng: StdRng) -> Self {
        SearchAgent {
            side,
            tie_break,
            ply,
            rng,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.side, config.tie_break, config.ply, seed),
            None => Self::new(config.side, config.tie_break, config.ply),
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The other side: `X` <-> `O`.
    pub fn switch_side(mark: Mark) -> Mark {
        mark.opponent()
    }

    /// Score every column for `mark` moving next, looking `ply` half-moves
    /// ahead. Illegal columns score -1.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn score_columns(
        &self,
        board: &mut Board,
        mark: Mark,
        ply: usize,
    ) -> Result<Vec<f64>, SearchError> {
        let mut scores = Vec::with_capacity(board.width());

        for col in 0..board.width() {
            if !board.is_legal_move(col) {
                scores.push(ILLEGAL_SCORE);
                continue;
            }
            if ply == 0 {
                scores.push(NEUTRAL_SCORE);
                continue;
            }

            let mut placed = board.scoped_place(col, mark)?;
            let score = if placed.wins_for(mark) {
                WIN_SCORE
            } else if ply > 1 {
                let replies = self.score_columns(&mut placed, Self::switch_side(mark), ply - 1)?;
                // Replies are never below -1, so -1 is a safe floor.
                let best_reply = replies.into_iter().fold(ILLEGAL_SCORE, f64::max);
                WIN_SCORE - best_reply
            } else {
                NEUTRAL_SCORE
            };
            scores.push(score);
        }

        Ok(scores)
    }

    /// Score the board for this agent's side and apply the tie-break.
    /// Fails only when the board is full.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<usize, SearchError> {
        let scores = self.score_columns(board, self.side, self.ply)?;
        if let Some(col) = self.tie_break.pick(&scores, &mut self.rng) {
            return Ok(col);
        }

        // Legal columns can still score -1: a move whose only reply fills
        // the board scores 100 - 101. Break the tie among what is playable.
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMove);
        }
        Ok(self.tie_break.select(&legal, &mut self.rng))
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, board: &mut Board) -> Result<usize, SearchError> {
        self.choose_move(board)
    }

    fn side(&self) -> Mark {
        self.side
    }

    fn name(&self) -> &str {
        "Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_POLICIES: [TieBreak; 3] = [TieBreak::Leftmost, TieBreak::Rightmost, TieBreak::Random];

    /// X holds columns 0, 1, 2 on the bottom row and threatens column 3.
    fn open_three_for_x() -> Board {
        let mut board = Board::default();
        for col in 0..3 {
            board.place(col, Mark::X).unwrap();
        }
        board
    }

    #[test]
    fn switch_side_flips_marks() {
        assert_eq!(SearchAgent::switch_side(Mark::X), Mark::O);
        assert_eq!(SearchAgent::switch_side(Mark::O), Mark::X);
    }

    #[test]
    fn ply_zero_scores_only_legality() {
        let agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 0, 1);
        let mut board = open_three_for_x();
        for _ in 0..board.height() {
            board.place(5, Mark::O).unwrap();
        }
        let before = board.clone();

        let scores = agent.score_columns(&mut board, Mark::X, 0).unwrap();
        assert_eq!(scores, vec![50.0, 50.0, 50.0, 50.0, 50.0, -1.0, 50.0]);
        assert_eq!(board, before);
    }

    #[test]
    fn ply_one_on_empty_board_is_neutral() {
        let agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 1, 1);
        let mut board = Board::default();
        let scores = agent.score_columns(&mut board, Mark::O, 1).unwrap();
        assert_eq!(scores, vec![50.0; 7]);
    }

    #[test]
    fn takes_winning_move() {
        let mut board = open_three_for_x();
        for ply in 1..=3 {
            let mut agent = SearchAgent::with_seed(Mark::X, TieBreak::Leftmost, ply, 3);
            let scores = agent.score_columns(&mut board, Mark::X, ply).unwrap();
            assert_eq!(scores[3], 100.0, "ply {ply}");
            assert_eq!(agent.choose_move(&mut board).unwrap(), 3, "ply {ply}");
        }
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = open_three_for_x();
        let before = board.clone();

        let agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 2, 0);
        let scores = agent.score_columns(&mut board, Mark::O, 2).unwrap();
        assert_eq!(scores, vec![0.0, 0.0, 0.0, 50.0, 0.0, 0.0, 0.0]);

        for ply in 2..=4 {
            for policy in ALL_POLICIES {
                let mut agent = SearchAgent::with_seed(Mark::O, policy, ply, 11);
                let action = agent.choose_move(&mut board).unwrap();
                assert_eq!(action, 3, "ply {ply}, tie-break {policy} should block");
                assert_eq!(board, before, "search must restore the board");
            }
        }
    }

    #[test]
    fn ply_one_cannot_see_the_threat() {
        let mut board = open_three_for_x();
        let mut agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 1, 0);
        assert_eq!(agent.choose_move(&mut board).unwrap(), 0);
    }

    #[test]
    fn prefers_win_over_block() {
        // Bottom row X X X O, O O O above it, and an X column threat on 6.
        // O to move wins at column 3 rather than blocking column 6.
        let mut board = Board::default();
        for col in 0..3 {
            board.place(col, Mark::X).unwrap();
            board.place(col, Mark::O).unwrap();
        }
        board.place(3, Mark::O).unwrap();
        for _ in 0..3 {
            board.place(6, Mark::X).unwrap();
        }
        assert!(!board.wins_for(Mark::X) && !board.wins_for(Mark::O));

        for policy in ALL_POLICIES {
            let mut agent = SearchAgent::with_seed(Mark::O, policy, 3, 5);
            let scores = agent.score_columns(&mut board, Mark::O, 3).unwrap();
            assert_eq!(scores[3], 100.0);
            assert_eq!(agent.choose_move(&mut board).unwrap(), 3, "{policy}");
        }
    }

    #[test]
    fn losing_positions_still_produce_a_move() {
        // X has an open three on columns 1..=3 with both ends free.
        let mut board = Board::default();
        for col in 1..4 {
            board.place(col, Mark::X).unwrap();
        }

        let agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 2, 0);
        let scores = agent.score_columns(&mut board, Mark::O, 2).unwrap();
        assert_eq!(scores, vec![0.0; 7]);

        let mut left = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 2, 0);
        let mut right = SearchAgent::with_seed(Mark::O, TieBreak::Rightmost, 2, 0);
        assert_eq!(left.choose_move(&mut board).unwrap(), 0);
        assert_eq!(right.choose_move(&mut board).unwrap(), 6);
    }

    #[test]
    fn full_columns_score_minus_one() {
        let mut board = Board::default();
        for _ in 0..3 {
            board.place(2, Mark::X).unwrap();
            board.place(2, Mark::O).unwrap();
        }
        let agent = SearchAgent::with_seed(Mark::X, TieBreak::Leftmost, 3, 0);
        let scores = agent.score_columns(&mut board, Mark::X, 3).unwrap();
        assert_eq!(scores[2], -1.0);
        assert!(scores
            .iter()
            .enumerate()
            .all(|(col, &s)| col == 2 || s >= 0.0));
    }

    #[test]
    fn filling_the_last_cell_scores_past_a_win() {
        let mut board = Board::new(2, 1);
        board.place(0, Mark::X).unwrap();

        let mut agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 2, 0);
        let scores = agent.score_columns(&mut board, Mark::O, 2).unwrap();
        assert_eq!(scores, vec![-1.0, 101.0]);
        assert_eq!(agent.choose_move(&mut board).unwrap(), 1);
    }

    /// Fill a 4x4 board column by column, bottom piece first. The layouts
    /// used below can never hold a line of four.
    fn board_from_columns(columns: [&[Mark]; 4]) -> Board {
        let mut board = Board::new(4, 4);
        for (col, stack) in columns.iter().enumerate() {
            for &mark in stack.iter() {
                board.place(col, mark).unwrap();
            }
        }
        board
    }

    /// Last two cells sit on top of columns 0 and 3.
    fn two_cells_apart() -> Board {
        use Mark::{O, X};
        board_from_columns([&[O, X, O], &[O, X, O, X], &[X, O, X, O], &[X, O, X]])
    }

    /// Last two cells are the top of column 0.
    fn two_cells_stacked() -> Board {
        use Mark::{O, X};
        board_from_columns([&[O, X], &[O, X, O, X], &[X, O, X, O], &[X, O, O, X]])
    }

    #[test]
    fn drawn_endgame_scores_legal_columns_minus_one() {
        let mut board = two_cells_apart();
        assert_eq!(board.legal_moves(), vec![0, 3]);

        let agent = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 4, 0);
        let scores = agent.score_columns(&mut board, Mark::O, 4).unwrap();
        assert_eq!(scores, vec![-1.0; 4]);

        let mut left = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 4, 0);
        let mut right = SearchAgent::with_seed(Mark::O, TieBreak::Rightmost, 4, 0);
        assert_eq!(left.choose_move(&mut board), Ok(0));
        assert_eq!(right.choose_move(&mut board), Ok(3));
    }

    #[test]
    fn near_full_boards_always_yield_a_legal_column() {
        for (name, start) in [("apart", two_cells_apart()), ("stacked", two_cells_stacked())] {
            for ply in 1..=5 {
                for policy in ALL_POLICIES {
                    for side in [Mark::X, Mark::O] {
                        let mut board = start.clone();
                        let mut agent = SearchAgent::with_seed(side, policy, ply, 17);
                        let col = agent.choose_move(&mut board).unwrap_or_else(|err| {
                            panic!("{name}, ply {ply}, {policy}, {side}: {err}")
                        });
                        assert!(
                            board.is_legal_move(col),
                            "{name}, ply {ply}, {policy}: column {col} is not playable"
                        );
                        assert_eq!(board, start);
                    }
                }
            }
        }
    }

    #[test]
    fn drawn_endgame_plays_out_to_a_full_board() {
        for policy in ALL_POLICIES {
            let mut board = two_cells_stacked();
            let mut to_move = Mark::O;
            while !board.is_full() {
                let mut agent = SearchAgent::with_seed(to_move, policy, 4, 3);
                let col = agent.choose_move(&mut board).unwrap();
                board.place(col, to_move).unwrap();
                to_move = to_move.opponent();
            }
            assert!(!board.wins_for(Mark::X) && !board.wins_for(Mark::O));
        }
    }

    #[test]
    fn full_board_has_no_legal_move() {
        let mut board = Board::new(3, 2);
        for col in 0..3 {
            board.place(col, Mark::X).unwrap();
            board.place(col, Mark::O).unwrap();
        }
        let mut agent = SearchAgent::with_seed(Mark::O, TieBreak::Random, 2, 0);
        assert_eq!(agent.choose_move(&mut board), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn left_and_right_differ_only_on_ties() {
        let mut board = Board::default();
        let mut left = SearchAgent::with_seed(Mark::O, TieBreak::Leftmost, 1, 0);
        let mut right = SearchAgent::with_seed(Mark::O, TieBreak::Rightmost, 1, 0);
        assert_eq!(left.choose_move(&mut board).unwrap(), 0);
        assert_eq!(right.choose_move(&mut board).unwrap(), 6);
    }

    #[test]
    fn search_restores_midgame_board() {
        let mut board = Board::default();
        for (i, &col) in [3, 3, 4, 2, 2, 5, 1, 6, 0].iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(col, mark).unwrap();
        }
        let before = board.clone();

        let mut agent = SearchAgent::with_seed(Mark::O, TieBreak::Random, 4, 21);
        let action = agent.choose_move(&mut board).unwrap();
        assert!(board.is_legal_move(action));
        assert_eq!(board, before);
    }

    #[test]
    fn seeded_random_agents_agree() {
        let mut board = Board::default();
        let mut a = SearchAgent::with_seed(Mark::X, TieBreak::Random, 2, 1234);
        let mut b = SearchAgent::with_seed(Mark::X, TieBreak::Random, 2, 1234);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&mut board).unwrap(),
                b.choose_move(&mut board).unwrap()
            );
        }
    }

    #[test]
    fn from_config_uses_seed() {
        let config = AgentConfig {
            side: Mark::X,
            tie_break: TieBreak::Rightmost,
            ply: 3,
            seed: Some(8),
        };
        let agent = SearchAgent::from_config(&config);
        assert_eq!(agent.side(), Mark::X);
        assert_eq!(agent.tie_break(), TieBreak::Rightmost);
        assert_eq!(agent.ply(), 3);
        assert_eq!(agent.name(), "Search");
    }
}
