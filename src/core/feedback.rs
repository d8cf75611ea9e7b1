//! Per-letter guess feedback
//!
//! Every letter of a guess receives one classification:
//! - Correct: same letter at the same position in the target
//! - Present: letter appears somewhere else in the target
//! - Absent: letter does not appear in the target at all
//!
//! Feedback is positional: entry `i` classifies letter `i` of the guess.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Emoji square used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII symbol: G (green), Y (yellow), - (gray)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess, one classification per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Duplicate letters
    /// A letter that is not at its target position is classified Present
    /// whenever the target contains it anywhere. Target letters are never
    /// consumed, so repeated guess letters can all be Present even when the
    /// target holds that letter once, and a letter already matched as
    /// Correct elsewhere still makes other copies Present. This is not the
    /// count-limited rule of the newspaper game and is kept on purpose.
    ///
    /// # Panics
    /// In debug builds, panics if the two words differ in length. Callers
    /// must only compare words of equal length.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::{Classification, Feedback, Word};
    ///
    /// let guess = Word::new("aab").unwrap();
    /// let target = Word::new("abc").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.classifications(),
    ///     &[
    ///         Classification::Correct,
    ///         Classification::Present,
    ///         Classification::Present
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let classifications = guess
            .chars()
            .iter()
            .zip(target.chars())
            .map(|(&g, &t)| {
                if g == t {
                    Classification::Correct
                } else if target.has_letter(g) {
                    Classification::Present
                } else {
                    Classification::Absent
                }
            })
            .collect();

        Self(classifications)
    }

    /// Per-letter classifications in guess order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    /// Number of classified letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Count letters with the given classification
    #[must_use]
    pub fn count(&self, kind: Classification) -> usize {
        self.0.iter().filter(|&&c| c == kind).count()
    }

    /// Convert feedback to a symbol string like "GY-GY"
    #[must_use]
    pub fn symbols(&self) -> String {
        self.to_string()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}
