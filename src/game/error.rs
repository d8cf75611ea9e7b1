//! Errors raised by the game state controller

use super::GameStatus;
use crate::core::WordError;
use thiserror::Error;

/// Reasons a game operation was rejected
///
/// None of these leave the session in a different state than before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Submit was called before the row was full.
    #[error("Not enough letters")]
    IncompleteGuess { entered: usize, required: usize },

    /// Any operation after the game reached Won or Lost.
    ///
    /// Late input is expected (a key pressed while the result is shown), so
    /// callers treat this as a no-op rather than a failure.
    #[error("Game is already over ({status})")]
    SessionOver { status: GameStatus },

    /// A session was configured with zero attempts.
    #[error("A game needs at least one attempt")]
    NoAttempts,

    /// The partial input could not be turned into a word.
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
}

impl GameError {
    /// True for errors that should be ignored silently
    #[must_use]
    pub const fn is_ignorable(&self) -> bool {
        matches!(self, Self::SessionOver { .. })
    }
}
