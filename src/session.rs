//! Human-versus-agent game flow. `X` always moves first; the human plays
//! whichever side the agent does not.

use crate::ai::Agent;
use crate::error::{MoveError, SessionError};
use crate::game::{Board, Mark, Outcome};

/// A piece that was dropped during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub mark: Mark,
}

/// What happened during one call to [`GameSession::human_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human: Placement,
    /// The agent's answer, absent when the human's move ended the game.
    pub reply: Option<Placement>,
    pub outcome: Option<Outcome>,
}

pub struct GameSession<A: Agent> {
    board: Board,
    to_move: Mark,
    outcome: Option<Outcome>,
    agent: A,
}

impl<A: Agent> GameSession<A> {
    /// Start a game on an empty `width` x `height` board. If the agent plays
    /// `X` it makes the opening move immediately.
    pub fn new(width: usize, height: usize, agent: A) -> Result<Self, SessionError> {
        let mut session = GameSession {
            board: Board::new(width, height),
            to_move: Mark::X,
            outcome: None,
            agent,
        };
        session.open()?;
        Ok(session)
    }

    /// Clear the board and start over with `X` to move. Returns the agent's
    /// opening move when it plays `X`.
    pub fn reset(&mut self) -> Result<Option<Placement>, SessionError> {
        self.board.clear();
        self.to_move = Mark::X;
        self.outcome = None;
        self.open()
    }

    fn open(&mut self) -> Result<Option<Placement>, SessionError> {
        if self.agent.side() == Mark::X && !self.board.is_full() {
            return self.agent_move().map(Some);
        }
        Ok(None)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Side whose turn it is
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn human_side(&self) -> Mark {
        self.agent.side().opponent()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play the human's move in `column`, then let the agent answer unless
    /// the game just ended.
    ///
    /// An illegal column, or an agent that fails to answer, leaves the
    /// session as it was before the call.
    pub fn human_move(&mut self, column: usize) -> Result<TurnReport, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.to_move != self.human_side() {
            return Err(SessionError::NotHumanTurn);
        }

        let human = self.apply(column)?;
        let reply = if self.is_over() {
            None
        } else {
            match self.agent_move() {
                Ok(placement) => Some(placement),
                Err(err) => {
                    // Take the human's piece back so the turn can be retried.
                    self.revert(human)?;
                    return Err(err);
                }
            }
        };

        Ok(TurnReport {
            human,
            reply,
            outcome: self.outcome,
        })
    }

    fn agent_move(&mut self) -> Result<Placement, SessionError> {
        let column = self.agent.select_move(&mut self.board)?;
        self.apply(column).map_err(SessionError::from)
    }

    /// Drop a piece for the side to move and update the outcome.
    fn apply(&mut self, column: usize) -> Result<Placement, MoveError> {
        let mark = self.to_move;
        let row = self.board.place(column, mark)?;

        if self.board.wins_for(mark) {
            self.outcome = Some(Outcome::Winner(mark));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }
        self.to_move = mark.opponent();

        Ok(Placement { column, row, mark })
    }

    /// Undo `placement`, which must be the latest piece played.
    fn revert(&mut self, placement: Placement) -> Result<(), MoveError> {
        self.board.unplace(placement.column)?;
        self.to_move = placement.mark;
        self.outcome = None;
        Ok(())
    }
}
