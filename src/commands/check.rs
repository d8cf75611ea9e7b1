//! Single guess check command
//!
//! Evaluates one guess against one target without starting a game.

use crate::core::{Feedback, Word, WordError};
use thiserror::Error;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Error type for the check command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Invalid target word: {0}")]
    InvalidTarget(WordError),
    #[error("Invalid guess: {0}")]
    InvalidGuess(WordError),
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or the guess length differs
/// from the target length.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, CheckError> {
    let target = Word::new(target).map_err(CheckError::InvalidTarget)?;
    let guess = Word::with_length(guess, target.len()).map_err(CheckError::InvalidGuess)?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}
