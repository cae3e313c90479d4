//! TUI rendering with ratatui
//!
//! Board, input line and game statistics.

use super::app::{App, MessageStyle};
use crate::core::{FeedbackMark, WORD_LENGTH};
use crate::game::{GameStatus, IndexSource, MAX_ATTEMPTS};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: IndexSource, S: KeyValueStore>(f: &mut Frame, app: &App<'_, R, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 FIVE WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: FeedbackMark) -> Style {
    let bg = match mark {
        FeedbackMark::Correct => Color::Green,
        FeedbackMark::Present => Color::Yellow,
        FeedbackMark::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

/// Tile spans for one board row
fn board_row(letters: &str, marks: Option<&[FeedbackMark; WORD_LENGTH]>) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut chars = letters.chars();

    for i in 0..WORD_LENGTH {
        let letter = chars.next().map_or('·', |c| c.to_ascii_uppercase());
        let style = marks.map_or_else(
            || Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            |m| mark_style(m[i]),
        );
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_board<R: IndexSource, S: KeyValueStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let session = app.session();
    let attempts = session.attempts();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in 0..MAX_ATTEMPTS {
        let line = if let Some(guess) = attempts.get(row) {
            board_row(guess.word.text(), Some(guess.feedback.marks()))
        } else if row == attempts.len() && !session.is_over() {
            // Letters typed so far, unscored
            board_row(&app.input_buffer, None)
        } else {
            board_row("", None)
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel<R: IndexSource, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, R, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats<R: IndexSource, S: KeyValueStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let meta = app.game.meta();
    let session = app.session();

    let answer = match session.reveal() {
        Some(target) => Span::styled(
            target.text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("?????", Style::default().fg(Color::DarkGray)),
    };

    let content = vec![
        Line::from(format!("🔥 Streak:     {}", meta.streak)),
        Line::from(format!("🏆 High Score: {}", meta.high_score)),
        Line::from(format!("Guesses left: {}", session.remaining_attempts())),
        Line::from(vec![Span::raw("Answer:       "), answer]),
    ];

    let stats = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(stats, area);
}

fn render_messages<R: IndexSource, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, R, S>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: IndexSource, S: KeyValueStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let (title, content, color) = match app.session().status() {
        GameStatus::InProgress => (
            " Type a 5-letter word | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        GameStatus::Won => (
            " 🎉 SOLVED! | Enter/n: play again, q: quit ",
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            " GAME OVER | Enter/n: play again, q: quit ",
            String::new(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: IndexSource, S: KeyValueStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let help_text = if app.session().is_over() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{Game, SequenceIndex};
    use crate::storage::MemoryStore;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App<'_, SequenceIndex, MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn board_row_pads_missing_letters() {
        let line = board_row("ab", None);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " A   B   ·   ·   ·  ");
    }

    #[test]
    fn hidden_target_until_game_over() {
        let dict = Dictionary::from_slice(&["crane", "slate"]).unwrap();
        let mut app = App::new(Game::new(&dict, SequenceIndex::new(vec![0]), MemoryStore::new()));

        let screen = draw(&app);
        assert!(screen.contains("?????"));
        assert!(!screen.contains("CRANE"));

        app.input_buffer = "crane".to_string();
        app.submit();

        let screen = draw(&app);
        assert!(screen.contains("Answer:       CRANE"));
        assert!(screen.contains("High Score: 1"));
    }
}
