//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackMark, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, mark: FeedbackMark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        FeedbackMark::Correct => text.black().on_green().bold(),
        FeedbackMark::Present => text.black().on_yellow().bold(),
        FeedbackMark::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a scored word as a row of colored tiles
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
