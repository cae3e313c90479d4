//! Cross-game bookkeeping: win streak and high score

use crate::storage::KeyValueStore;
use std::io;

/// Store key holding the best streak ever reached
pub const HIGH_SCORE_KEY: &str = "wordleHighScore";

/// Streak and high score carried from one game to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetaState {
    /// Consecutive wins since the last loss
    pub streak: u32,
    /// Largest streak ever reached
    pub high_score: u32,
}

impl MetaState {
    #[must_use]
    pub const fn new(streak: u32, high_score: u32) -> Self {
        Self { streak, high_score }
    }

    /// Fresh state with the high score read from `store`
    ///
    /// A missing or unparsable value counts as zero.
    #[must_use]
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let high_score = store
            .get(HIGH_SCORE_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        Self::new(0, high_score)
    }

    /// Write the high score to `store`
    ///
    /// # Errors
    /// Propagates the store's I/O error.
    pub fn persist<S: KeyValueStore>(&self, store: &mut S) -> io::Result<()> {
        store.set(HIGH_SCORE_KEY, &self.high_score.to_string())
    }

    /// State after a win; the flag is set when the high score moved
    #[must_use]
    pub const fn after_win(self) -> (Self, bool) {
        let streak = self.streak.saturating_add(1);
        if streak > self.high_score {
            (Self::new(streak, streak), true)
        } else {
            (Self::new(streak, self.high_score), false)
        }
    }

    /// State after a loss; the high score is never touched
    #[must_use]
    pub const fn after_loss(self) -> Self {
        Self::new(0, self.high_score)
    }
}
