//! Plain-text play over any reader/writer pair: one column number per line,
//! the board printed after every turn.

use std::io::{self, BufRead, Write};

use super::{outcome_message, prompt_message};
use crate::ai::Agent;
use crate::error::{MoveError, SessionError};
use crate::session::GameSession;

pub fn run<A: Agent, R: BufRead, W: Write>(
    session: &mut GameSession<A>,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", session.board())?;
    writeln!(out, "Starting game! {}", prompt_message(session.human_side()))?;

    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                let msg = match session.reset() {
                    Ok(_) => format!("Starting game! {}", prompt_message(session.human_side())),
                    Err(err) => format!("Could not start a new game: {err}"),
                };
                write!(out, "{}", session.board())?;
                writeln!(out, "{msg}")?;
                continue;
            }
            _ => {}
        }

        let Ok(column) = cmd.parse::<usize>() else {
            writeln!(out, "Invalid move. Try again.")?;
            continue;
        };

        let msg = match session.human_move(column) {
            Ok(report) => {
                write!(out, "{}", session.board())?;
                match (report.reply, report.outcome) {
                    (_, Some(outcome)) => outcome_message(outcome),
                    (Some(reply), None) => format!("{} played column {}. Select a column.", reply.mark, reply.column),
                    (None, None) => prompt_message(session.human_side()),
                }
            }
            Err(SessionError::GameOver) => "Game over! Type 'new' to restart.".to_string(),
            Err(SessionError::Move(MoveError::ColumnFull(_) | MoveError::InvalidColumn { .. })) => {
                "Invalid move. Try again.".to_string()
            }
            // The session rolled the turn back, so the player can try again.
            Err(err) => format!("Error: {err}"),
        };
        writeln!(out, "{msg}")?;
    }

    Ok(())
}
