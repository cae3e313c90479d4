//! Scoring command
//!
//! Scores one guess against one target without starting a game.

use crate::core::{Feedback, Word, score};

/// Result of scoring a pair of words
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Only the shape of the words is checked; neither has to be in the
/// dictionary.
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let feedback = score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
