use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;

use super::{game_view, outcome_message, prompt_message};
use crate::ai::SearchAgent;
use crate::error::{MoveError, SessionError};
use crate::session::GameSession;

pub struct App {
    session: GameSession<SearchAgent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession<SearchAgent>) -> Self {
        let message = Some(format!(
            "Starting game! {}",
            prompt_message(session.human_side())
        ));
        App {
            selected_column: session.board().width() / 2, // Start in middle
            session,
            should_quit: false,
            message,
        }
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '0'..='9') => {
                let col = c as usize - '0' as usize;
                if col < self.session.board().width() {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.new_game(),
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.message = Some(match self.session.reset() {
            Ok(_) => format!(
                "Starting game! {}",
                prompt_message(self.session.human_side())
            ),
            Err(err) => format!("Could not start a new game: {err}"),
        });
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.message = Some(match self.session.human_move(self.selected_column) {
            Ok(report) => match report.outcome {
                Some(outcome) => outcome_message(outcome),
                None => prompt_message(self.session.human_side()),
            },
            Err(SessionError::GameOver) => "Game over! Press 'r' to restart.".to_string(),
            Err(SessionError::Move(MoveError::ColumnFull(_) | MoveError::InvalidColumn { .. })) => {
                "Invalid move. Try again.".to_string()
            }
            Err(err) => format!("Error: {err}"),
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
