//! Five Wordle
//!
//! A five-guess Wordle game: a random target word, per-letter feedback on
//! every guess, and a win streak with a persisted high score.
//!
//! # Quick Start
//!
//! ```rust
//! use five_wordle::dictionary::Dictionary;
//! use five_wordle::game::{Game, GameStatus, SequenceIndex};
//! use five_wordle::storage::MemoryStore;
//!
//! let dictionary = Dictionary::from_slice(&["crane", "slate"]).unwrap();
//! let mut game = Game::new(&dictionary, SequenceIndex::new(vec![0]), MemoryStore::new());
//!
//! let turn = game.submit_guess("slate").unwrap();
//! assert_eq!(turn.feedback.unwrap().to_emoji(), "⬜⬜🟩⬜🟩");
//!
//! let turn = game.submit_guess("CRANE").unwrap();
//! assert_eq!(turn.status, GameStatus::Won);
//! assert_eq!(game.meta().streak, 1);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Session state machine and streak bookkeeping
pub mod game;

// High score persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
