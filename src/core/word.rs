//! Game word representation
//!
//! A Word stores a lowercase word of any non-zero length along with the set
//! of letters it contains, used by feedback calculation.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase ASCII word with a letter set
///
/// Keeps the distinct letters alongside the text so that containment checks
/// do not rescan the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII
    /// characters, or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before lowercasing: some non-ASCII letters lowercase to ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::LengthMismatch {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a `Word` has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
