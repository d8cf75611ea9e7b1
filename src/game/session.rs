//! Game session state machine
//!
//! A session owns the target word and moves row by row through the board.
//! Input arrives as discrete events; a full row is evaluated on submit and
//! the session then either advances, wins, or loses.

use super::GameError;
use crate::core::{Feedback, Word};
use std::fmt;

/// Default number of rows on the board
pub const MAX_ATTEMPTS: usize = 6;

/// Status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the status is terminal (Won or Lost)
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One submitted row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
}

/// A discrete input event from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    AppendLetter(char),
    DeleteLetter,
    Submit,
}

/// What changed after an accepted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The event was valid but had no effect (row full, nothing to delete,
    /// non-letter key).
    Unchanged,
    /// The partial input changed; read it back with [`GameSession::input`].
    InputChanged,
    /// A row was evaluated.
    Submitted { attempt: Attempt, status: GameStatus },
}

/// State of a single game from word assignment to Won/Lost
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    max_attempts: usize,
    row: usize,
    input: String,
    attempts: Vec<Attempt>,
    status: GameStatus,
}

impl GameSession {
    /// Start a session for `target` with `max_attempts` rows
    ///
    /// # Errors
    /// Returns `GameError::NoAttempts` if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::Word;
    /// use wordle_client::game::{GameSession, GameStatus, InputEvent};
    ///
    /// let mut session = GameSession::new(Word::new("abc").unwrap(), 6).unwrap();
    /// for ch in "abc".chars() {
    ///     session.dispatch(InputEvent::AppendLetter(ch)).unwrap();
    /// }
    /// session.dispatch(InputEvent::Submit).unwrap();
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn new(target: Word, max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }

        Ok(Self::start(target, max_attempts))
    }

    /// Start a session with the standard six rows
    #[must_use]
    pub fn standard(target: Word) -> Self {
        Self::start(target, MAX_ATTEMPTS)
    }

    // `max_attempts` must be non-zero
    fn start(target: Word, max_attempts: usize) -> Self {
        tracing::debug!(
            word_length = target.len(),
            max_attempts,
            "game session created"
        );

        Self {
            input: String::with_capacity(target.len()),
            target,
            max_attempts,
            row: 0,
            attempts: Vec::with_capacity(max_attempts),
            status: GameStatus::InProgress,
        }
    }

    /// Route one input event to the matching operation
    ///
    /// # Errors
    /// See [`Self::append_letter`], [`Self::delete_letter`] and [`Self::submit`].
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Update, GameError> {
        match event {
            InputEvent::AppendLetter(ch) => self.append_letter(ch),
            InputEvent::DeleteLetter => self.delete_letter(),
            InputEvent::Submit => self.submit(),
        }
    }

    /// Append a letter to the current row
    ///
    /// Non-letters and letters typed into a full row are ignored.
    ///
    /// # Errors
    /// Returns `GameError::SessionOver` once the game has ended.
    pub fn append_letter(&mut self, ch: char) -> Result<Update, GameError> {
        self.ensure_in_progress()?;

        if !ch.is_ascii_alphabetic() || self.input.len() >= self.target.len() {
            return Ok(Update::Unchanged);
        }

        self.input.push(ch.to_ascii_lowercase());
        Ok(Update::InputChanged)
    }

    /// Remove the last letter of the current row
    ///
    /// # Errors
    /// Returns `GameError::SessionOver` once the game has ended.
    pub fn delete_letter(&mut self) -> Result<Update, GameError> {
        self.ensure_in_progress()?;

        Ok(match self.input.pop() {
            Some(_) => Update::InputChanged,
            None => Update::Unchanged,
        })
    }

    /// Evaluate the current row
    ///
    /// On success the attempt is recorded and the status is decided: Won on
    /// an exact match, Lost on a miss in the final row, otherwise the next row
    /// starts with empty input.
    ///
    /// # Errors
    /// - `GameError::IncompleteGuess` if the row is not full
    /// - `GameError::SessionOver` once the game has ended
    pub fn submit(&mut self) -> Result<Update, GameError> {
        self.ensure_in_progress()?;

        let required = self.target.len();
        if self.input.len() < required {
            return Err(GameError::IncompleteGuess {
                entered: self.input.len(),
                required,
            });
        }

        let guess = Word::with_length(self.input.as_str(), required)?;
        let feedback = Feedback::calculate(&guess, &self.target);
        let attempt = Attempt {
            row: self.row,
            guess,
            feedback,
        };

        if attempt.guess.text() == self.target.text() {
            self.status = GameStatus::Won;
        } else if self.row + 1 == self.max_attempts {
            self.status = GameStatus::Lost;
        } else {
            self.row += 1;
            self.input.clear();
        }

        tracing::info!(
            row = attempt.row,
            guess = %attempt.guess,
            feedback = %attempt.feedback,
            status = %self.status,
            "guess submitted"
        );

        self.attempts.push(attempt.clone());

        Ok(Update::Submitted {
            attempt,
            status: self.status,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::SessionOver {
                status: self.status,
            });
        }
        Ok(())
    }

    /// The secret word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Letters per row
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Index of the row being typed (or the last row played once over)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submitted rows, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Rows not yet submitted
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.attempts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Correct, Present};

    fn session(target: &str) -> GameSession {
        GameSession::standard(Word::new(target).unwrap())
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch).unwrap();
        }
    }

    fn play(session: &mut GameSession, word: &str) -> Result<Update, GameError> {
        type_word(session, word);
        session.submit()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let s = session("crane");
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.row(), 0);
        assert_eq!(s.input(), "");
        assert!(s.attempts().is_empty());
        assert_eq!(s.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(s.word_length(), 5);
    }

    #[test]
    fn standard_matches_new_with_six_rows() {
        let target = Word::new("crane").unwrap();
        let standard = GameSession::standard(target.clone());
        let explicit = GameSession::new(target, MAX_ATTEMPTS).unwrap();

        assert_eq!(standard.max_attempts(), explicit.max_attempts());
        assert_eq!(standard.target(), explicit.target());
        assert_eq!(standard.row(), explicit.row());
        assert_eq!(standard.status(), explicit.status());
        assert_eq!(standard.remaining_attempts(), explicit.remaining_attempts());
    }

    #[test]
    fn zero_attempts_rejected() {
        let result = GameSession::new(Word::new("crane").unwrap(), 0);
        assert!(matches!(result, Err(GameError::NoAttempts)));
    }

    #[test]
    fn append_letter_normalizes_case() {
        let mut s = session("crane");
        assert_eq!(s.append_letter('C').unwrap(), Update::InputChanged);
        assert_eq!(s.append_letter('r').unwrap(), Update::InputChanged);
        assert_eq!(s.input(), "cr");
    }

    #[test]
    fn append_letter_ignores_non_letters() {
        let mut s = session("crane");
        assert_eq!(s.append_letter('1').unwrap(), Update::Unchanged);
        assert_eq!(s.append_letter(' ').unwrap(), Update::Unchanged);
        assert_eq!(s.append_letter('é').unwrap(), Update::Unchanged);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn append_letter_stops_at_word_length() {
        let mut s = session("crane");
        type_word(&mut s, "crane");
        assert_eq!(s.append_letter('s').unwrap(), Update::Unchanged);
        assert_eq!(s.input(), "crane");
    }

    #[test]
    fn delete_letter() {
        let mut s = session("crane");
        assert_eq!(s.delete_letter().unwrap(), Update::Unchanged);

        type_word(&mut s, "cr");
        assert_eq!(s.delete_letter().unwrap(), Update::InputChanged);
        assert_eq!(s.input(), "c");
    }

    #[test]
    fn submit_incomplete_changes_nothing() {
        let mut s = session("crane");
        type_word(&mut s, "cra");

        let err = s.submit().unwrap_err();
        assert_eq!(
            err,
            GameError::IncompleteGuess {
                entered: 3,
                required: 5
            }
        );
        assert_eq!(err.to_string(), "Not enough letters");
        assert_eq!(s.row(), 0);
        assert_eq!(s.input(), "cra");
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.attempts().is_empty());
    }

    #[test]
    fn submit_miss_advances_row() {
        let mut s = session("crane");
        let update = play(&mut s, "trace").unwrap();

        let Update::Submitted { attempt, status } = update else {
            panic!("expected a submitted row");
        };
        assert_eq!(attempt.row, 0);
        assert_eq!(attempt.guess.text(), "trace");
        assert_eq!(
            attempt.feedback.classifications(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(s.row(), 1);
        assert_eq!(s.input(), "");
        assert_eq!(s.remaining_attempts(), 5);
    }

    #[test]
    fn exact_match_wins() {
        let mut s = session("crane");
        play(&mut s, "trace").unwrap();
        play(&mut s, "crone").unwrap();
        let update = play(&mut s, "crane").unwrap();

        assert!(matches!(
            update,
            Update::Submitted {
                status: GameStatus::Won,
                ..
            }
        ));
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.attempts().len(), 3);
        assert!(s.attempts()[2].feedback.is_perfect());
    }

    #[test]
    fn win_on_final_row() {
        let mut s = session("crane");
        for _ in 0..5 {
            play(&mut s, "slate").unwrap();
        }
        play(&mut s, "crane").unwrap();
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("crane");
        for expected_row in 1..=5 {
            play(&mut s, "slate").unwrap();
            assert_eq!(s.row(), expected_row);
            assert_eq!(s.status(), GameStatus::InProgress);
        }

        play(&mut s, "slate").unwrap();
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.row(), 5);
        assert_eq!(s.attempts().len(), 6);
        assert_eq!(s.remaining_attempts(), 0);
    }

    #[test]
    fn custom_attempt_count() {
        let mut s = GameSession::new(Word::new("ab").unwrap(), 1).unwrap();
        play(&mut s, "ba").unwrap();
        assert_eq!(s.status(), GameStatus::Lost);
    }

    #[test]
    fn terminal_session_rejects_everything() {
        let mut s = session("crane");
        play(&mut s, "crane").unwrap();

        for event in [
            InputEvent::AppendLetter('a'),
            InputEvent::DeleteLetter,
            InputEvent::Submit,
        ] {
            let err = s.dispatch(event).unwrap_err();
            assert_eq!(
                err,
                GameError::SessionOver {
                    status: GameStatus::Won
                }
            );
            assert!(err.is_ignorable());
        }

        assert_eq!(s.attempts().len(), 1);
        assert_eq!(s.row(), 0);
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.target().text(), "crane");
    }

    #[test]
    fn dispatch_routes_events() {
        let mut s = session("ab");
        s.dispatch(InputEvent::AppendLetter('x')).unwrap();
        s.dispatch(InputEvent::DeleteLetter).unwrap();
        s.dispatch(InputEvent::AppendLetter('a')).unwrap();
        s.dispatch(InputEvent::AppendLetter('b')).unwrap();
        s.dispatch(InputEvent::Submit).unwrap();
        assert_eq!(s.status(), GameStatus::Won);
    }
}
