//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, IndexSource, Session};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, R: IndexSource, S: KeyValueStore> {
    pub game: Game<'a, R, S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: IndexSource, S: KeyValueStore> App<'a, R, S> {
    #[must_use]
    pub fn new(game: Game<'a, R, S>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the 5-letter word. Enter submits, Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.game.session()
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&guess) {
            Ok(turn) => {
                if let Some(err) = turn.persist_error {
                    self.add_message(&err, MessageStyle::Error);
                }
                match turn.status {
                    GameStatus::Won => {
                        let text = format!("🎉 {}!", self.session().message());
                        self.add_message(&text, MessageStyle::Success);
                        if turn.new_high_score {
                            self.add_message("🏆 New high score!", MessageStyle::Success);
                        }
                        self.add_message("Press Enter or 'n' to play again.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        let text = format!("❌ {}", self.session().message());
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press Enter or 'n' to play again.", MessageStyle::Info);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => {
                // Keep the rejected letters so they can be edited
                self.input_buffer = guess;
                self.add_message(&format!("⛔ {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session().is_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {
                    // Game over: only new game or quit
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: IndexSource, S: KeyValueStore>(app: App<'_, R, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, R, S>(terminal: &mut Terminal<B>, mut app: App<'_, R, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    R: IndexSource,
    S: KeyValueStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{MetaState, SequenceIndex};
    use crate::storage::MemoryStore;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["crane", "slate", "robot", "floor", "speed", "sassy"]).unwrap()
    }

    fn press(app: &mut App<'_, SequenceIndex, MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_, SequenceIndex, MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(dict: &Dictionary) -> App<'_, SequenceIndex, MemoryStore> {
        App::new(Game::new(dict, SequenceIndex::new(vec![0, 1]), MemoryStore::new()))
    }

    #[test]
    fn typing_is_limited_and_lowercased() {
        let dict = dictionary();
        let mut app = app(&dict);

        for c in "CR4ANEX".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn rejected_guess_keeps_buffer() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "cran");

        assert_eq!(app.input_buffer, "cran");
        assert!(app.session().attempts().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("guess must be 5 letters"));
    }

    #[test]
    fn accepted_guess_clears_buffer() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "slate");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session().attempts().len(), 1);
    }

    #[test]
    fn win_then_enter_starts_new_game() {
        let dict = dictionary();
        let mut app = app(&dict);

        type_word(&mut app, "crane");
        assert!(app.session().is_over());
        assert!(app.messages.iter().any(|m| m.text.contains("correct")));

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.session().is_over());
        assert_eq!(app.session().hidden_target().text(), "slate");
        assert_eq!(app.game.meta(), MetaState::new(1, 1));
    }

    #[test]
    fn loss_reports_target() {
        let dict = dictionary();
        let mut app = app(&dict);

        for word in ["slate", "robot", "floor", "speed", "sassy"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.session().status(), GameStatus::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("game over, word was crane"))
        );
    }

    #[test]
    fn quit_keys() {
        let dict = dictionary();

        let mut app1 = app(&dict);
        press(&mut app1, KeyCode::Esc);
        assert!(app1.should_quit);

        let mut app2 = app(&dict);
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);

        // 'q' is a letter while playing
        let mut app3 = app(&dict);
        press(&mut app3, KeyCode::Char('q'));
        assert!(!app3.should_quit);
        assert_eq!(app3.input_buffer, "q");
    }

    #[test]
    fn message_list_is_bounded() {
        let dict = dictionary();
        let mut app = app(&dict);

        for _ in 0..10 {
            type_word(&mut app, "zzzzz");
            app.input_buffer.clear();
        }
        assert_eq!(app.messages.len(), 5);
    }
}
