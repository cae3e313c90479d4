//! A single game: target, attempts and the win/loss state machine

use super::meta::MetaState;
use super::random::IndexSource;
use crate::core::{Feedback, WORD_LENGTH, Word, score};
use crate::dictionary::Dictionary;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 5;

/// Message for a guess of the wrong length
pub const INVALID_LENGTH_MESSAGE: &str = "guess must be 5 letters";
/// Message for a well-formed guess that is not playable
pub const NOT_IN_DICTIONARY_MESSAGE: &str = "word not in the list";
/// Message after a winning guess
pub const WIN_MESSAGE: &str = "correct";

/// Rejected guesses; neither consumes an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Guess did not have exactly 5 characters (holds the actual count)
    InvalidLength(usize),
    /// Guess is not in the dictionary (holds the normalized guess)
    NotInDictionary(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(_) => write!(f, "{INVALID_LENGTH_MESSAGE}"),
            Self::NotInDictionary(_) => write!(f, "{NOT_IN_DICTIONARY_MESSAGE}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of an accepted (or ignored) submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Status after the submission
    pub status: GameStatus,
    /// Feedback of the appended guess; `None` when the call was ignored
    pub feedback: Option<Feedback>,
    /// Streak and high score after the submission
    pub meta: MetaState,
    /// Set when this turn raised the high score
    pub new_high_score: bool,
    /// Set when the game was already over and nothing changed
    pub ignored: bool,
    /// Failure text if persisting a new high score did not succeed
    pub persist_error: Option<String>,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    attempts: Vec<Guess>,
    status: GameStatus,
    message: String,
}

impl Session {
    /// Start a game with a uniformly drawn target
    pub fn new<R: IndexSource + ?Sized>(dictionary: &Dictionary, picker: &mut R) -> Self {
        let index = picker.next_index(dictionary.len());
        Self::with_target(dictionary.sample(index).clone())
    }

    /// Start a game with a known target
    ///
    /// Callers are responsible for `target` being a dictionary word.
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
            message: String::new(),
        }
    }

    /// Validate, score and record a guess
    ///
    /// `raw` is trimmed and lowercased first. On a win the streak grows and
    /// the high score follows it if exceeded; on the fifth miss the streak
    /// drops to zero. Once the game is over every call is ignored.
    ///
    /// # Errors
    /// Returns `GuessError` for a wrong-length or unknown word. The session
    /// message is set to the rejection text and no attempt is consumed.
    pub fn submit_guess(
        &mut self,
        raw: &str,
        dictionary: &Dictionary,
        meta: MetaState,
    ) -> Result<Turn, GuessError> {
        if self.is_over() {
            return Ok(Turn {
                status: self.status,
                feedback: None,
                meta,
                new_high_score: false,
                ignored: true,
                persist_error: None,
            });
        }

        let normalized = raw.trim().to_lowercase();
        let guess = match Self::validate(&normalized, dictionary) {
            Ok(word) => word,
            Err(err) => {
                self.message = err.to_string();
                return Err(err);
            }
        };

        let feedback = score(&guess, &self.target);
        let won = guess == self.target;
        self.attempts.push(Guess {
            word: guess,
            feedback,
        });

        let mut new_high_score = false;
        let meta = if won {
            self.status = GameStatus::Won;
            self.message = WIN_MESSAGE.to_string();
            let (meta, raised) = meta.after_win();
            new_high_score = raised;
            meta
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = format!("game over, word was {}", self.target);
            meta.after_loss()
        } else {
            self.message.clear();
            meta
        };

        Ok(Turn {
            status: self.status,
            feedback: Some(feedback),
            meta,
            new_high_score,
            ignored: false,
            persist_error: None,
        })
    }

    fn validate(normalized: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
        let len = normalized.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }
        if !dictionary.contains(normalized) {
            return Err(GuessError::NotInDictionary(normalized.to_string()));
        }
        // Dictionary entries are valid words, so this only fails on a
        // malformed dictionary
        Word::new(normalized).map_err(|_| GuessError::NotInDictionary(normalized.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Guess] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Last status line for the player
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Guesses still available
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// The target, only once the game is over
    #[must_use]
    pub fn reveal(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    /// The target; `None` while the game is in progress
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.reveal()
    }

    #[cfg(test)]
    pub(crate) const fn hidden_target(&self) -> &Word {
        &self.target
    }
}
