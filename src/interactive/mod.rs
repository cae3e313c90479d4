//! Interactive TUI game
//!
//! Board view and keyboard handling built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
