//! Game session management
//!
//! [`Session`] holds one game and its state machine; [`Game`] owns the
//! current session together with the streak/high-score state and the
//! injected randomness and storage, and is what hosts drive.

pub mod meta;
pub mod random;
mod session;

pub use meta::{HIGH_SCORE_KEY, MetaState};
pub use random::{IndexSource, RandomIndex, SequenceIndex};
pub use session::{
    GameStatus, Guess, GuessError, INVALID_LENGTH_MESSAGE, MAX_ATTEMPTS,
    NOT_IN_DICTIONARY_MESSAGE, Session, Turn, WIN_MESSAGE,
};

use crate::dictionary::Dictionary;
use crate::storage::KeyValueStore;

/// A sequence of games sharing one dictionary, store and streak
pub struct Game<'a, R: IndexSource, S: KeyValueStore> {
    dictionary: &'a Dictionary,
    picker: R,
    store: S,
    session: Session,
    meta: MetaState,
}

impl<'a, R: IndexSource, S: KeyValueStore> Game<'a, R, S> {
    /// Load the high score from `store` and start the first game
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut picker: R, store: S) -> Self {
        let meta = MetaState::load(&store);
        let session = Session::new(dictionary, &mut picker);

        Self {
            dictionary,
            picker,
            store,
            session,
            meta,
        }
    }

    /// Replace the current game with a fresh one
    ///
    /// Streak and high score carry over.
    pub fn reset(&mut self) -> &Session {
        self.session = Session::new(self.dictionary, &mut self.picker);
        &self.session
    }

    /// Submit a guess to the current game
    ///
    /// A raised high score is written to the store immediately. A failed
    /// write does not undo the turn; it is reported in
    /// [`Turn::persist_error`].
    ///
    /// # Errors
    /// Returns `GuessError` for rejected input; see [`Session::submit_guess`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<Turn, GuessError> {
        let mut turn = self.session.submit_guess(raw, self.dictionary, self.meta)?;
        self.meta = turn.meta;

        if turn.new_high_score
            && let Err(e) = self.meta.persist(&mut self.store)
        {
            turn.persist_error = Some(format!("Could not save high score: {e}"));
        }

        Ok(turn)
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn meta(&self) -> MetaState {
        self.meta
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
