//! Where secret words come from
//!
//! A game cannot start without a target word, so every source either returns
//! a word or a `SourceError`.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use thiserror::Error;

/// Error type for word sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("No words available to pick from")]
    Empty,
}

/// Supplies target words for new games
pub trait WordSource {
    /// Pick the target for the next game
    ///
    /// # Errors
    /// Returns a `SourceError` if no word can be supplied.
    fn next_word(&mut self) -> Result<Word, SourceError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn next_word(&mut self) -> Result<Word, SourceError> {
        (**self).next_word()
    }
}

/// Picks uniformly at random from a word list
pub struct RandomWordSource {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWordSource {
    /// Create a source seeded from the thread-local generator
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a source with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// True if there is nothing to pick from
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWordSource {
    fn next_word(&mut self) -> Result<Word, SourceError> {
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SourceError::Empty)?;

        tracing::debug!(word_length = word.len(), "picked random target word");
        Ok(word)
    }
}

/// Always supplies the same word
pub struct FixedWordSource(Word);

impl FixedWordSource {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl WordSource for FixedWordSource {
    fn next_word(&mut self) -> Result<Word, SourceError> {
        Ok(self.0.clone())
    }
}
