//! Guess scoring and per-letter feedback
//!
//! Each guessed letter gets one of three marks:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs in an unconsumed target position
//! - Absent (gray): neither of the above

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    Correct,
    Present,
    Absent,
}

impl FeedbackMark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single mark character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜/⬛.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess: exactly one mark per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackMark; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([FeedbackMark::Correct; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [FeedbackMark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The per-letter marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[FeedbackMark; WORD_LENGTH] {
        &self.0
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches become Correct, and both the
    ///    guess letter and the target letter are consumed
    /// 2. Second pass: each unconsumed guess letter takes the leftmost
    ///    unconsumed target letter equal to it, if any, and becomes Present
    ///
    /// A letter is therefore never marked Present more times than it remains
    /// in the target after exact matches are removed.
    ///
    /// # Examples
    /// ```
    /// use five_wordle::core::{Feedback, FeedbackMark::*, Word};
    ///
    /// let guess = Word::new("spass").unwrap();
    /// let target = Word::new("sassy").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.marks(), &[Correct, Absent, Present, Correct, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [FeedbackMark::Absent; WORD_LENGTH];
        let mut guess_left: [Option<u8>; WORD_LENGTH] = guess.chars().map(Some);
        let mut target_left: [Option<u8>; WORD_LENGTH] = target.chars().map(Some);

        // First pass: Correct letters consume their target slot
        // Allow: Index needed to compare both words and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                marks[i] = FeedbackMark::Correct;
                guess_left[i] = None;
                target_left[i] = None;
            }
        }

        // Second pass: Present letters consume the leftmost remaining match
        for (i, letter) in guess_left.iter().enumerate() {
            let Some(letter) = letter else { continue };
            if let Some(slot) = target_left.iter_mut().find(|slot| **slot == Some(*letter)) {
                marks[i] = FeedbackMark::Present;
                *slot = None;
            }
        }

        Self(marks)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == FeedbackMark::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == FeedbackMark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

/// Score `guess` against `target`; see [`Feedback::calculate`]
#[inline]
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess, target)
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Option<Vec<FeedbackMark>> = s.chars().map(FeedbackMark::from_char).collect();

        parsed
            .and_then(|marks| <[FeedbackMark; WORD_LENGTH]>::try_from(marks).ok())
            .map(Self)
            .ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
