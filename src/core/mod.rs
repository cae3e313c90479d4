//! Core domain types for the game
//!
//! Words and the guess scorer. Everything here is pure and has no
//! knowledge of sessions, storage or the terminal.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackMark, score};
pub use word::{WORD_LENGTH, Word, WordError};
