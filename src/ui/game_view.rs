use crate::ai::SearchAgent;
use crate::game::{Board, Mark};
use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession<SearchAgent>,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(session.board().height() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Empty => Color::DarkGray,
        Mark::X => Color::Red,
        Mark::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, session: &GameSession<SearchAgent>, area: Rect) {
    let agent = session.agent();
    let settings = format!("ply {}  |  tie-break {}", agent.ply(), agent.tie_break());

    let status = if session.is_over() {
        format!("Game Over  |  {settings}")
    } else {
        format!("Current Player: {}  |  {settings}", session.to_move())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(mark_color(session.to_move()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();
    let rule = "═".repeat(board.width() * 3 + 1);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!(" {} ", col % 10);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let mark = board.get(row, col);
            let symbol = match mark {
                Mark::Empty => " . ",
                Mark::X | Mark::O => " ● ",
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(mark_color(mark))));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter or 0-9: Drop  |  R: New Game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
