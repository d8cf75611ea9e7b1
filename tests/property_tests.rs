//! Property-based tests for feedback calculation and the game state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated words and guess sequences.

use proptest::prelude::*;
use wordle_client::core::{Classification, Feedback, Word};
use wordle_client::game::{GameError, GameSession, GameStatus, InputEvent, MAX_ATTEMPTS};

prop_compose! {
    /// A target and a guess of the same length, drawn from a small alphabet so
    /// that repeated and shared letters are common
    fn word_pair()(len in 1usize..8)
        (target in proptest::collection::vec(b'a'..=b'f', len),
         guess in proptest::collection::vec(b'a'..=b'f', len)) -> (Word, Word) {
        let target = Word::new(String::from_utf8(target).unwrap()).unwrap();
        let guess = Word::new(String::from_utf8(guess).unwrap()).unwrap();
        (guess, target)
    }
}

fn arbitrary_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => (b'a'..=b'e').prop_map(|c| InputEvent::AppendLetter(char::from(c))),
        1 => Just(InputEvent::DeleteLetter),
        2 => Just(InputEvent::Submit),
    ]
}

fn submit_word(session: &mut GameSession, word: &str) {
    for ch in word.chars() {
        session.dispatch(InputEvent::AppendLetter(ch)).unwrap();
    }
    session.dispatch(InputEvent::Submit).unwrap();
}

proptest! {
    #[test]
    fn feedback_is_deterministic((guess, target) in word_pair()) {
        let first = Feedback::calculate(&guess, &target);
        let second = Feedback::calculate(&guess, &target);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn feedback_has_one_entry_per_letter((guess, target) in word_pair()) {
        let feedback = Feedback::calculate(&guess, &target);
        prop_assert_eq!(feedback.len(), guess.len());
    }

    #[test]
    fn correct_iff_same_letter((guess, target) in word_pair()) {
        let feedback = Feedback::calculate(&guess, &target);
        for (i, &c) in feedback.classifications().iter().enumerate() {
            let same = guess.char_at(i) == target.char_at(i);
            prop_assert_eq!(c == Classification::Correct, same);
        }
    }

    #[test]
    fn present_iff_misplaced_but_contained((guess, target) in word_pair()) {
        let feedback = Feedback::calculate(&guess, &target);
        for (i, &c) in feedback.classifications().iter().enumerate() {
            let letter = guess.char_at(i);
            let expected = letter != target.char_at(i) && target.has_letter(letter);
            prop_assert_eq!(c == Classification::Present, expected);
        }
    }

    #[test]
    fn self_feedback_is_perfect((guess, _target) in word_pair()) {
        prop_assert!(Feedback::calculate(&guess, &guess).is_perfect());
    }

    #[test]
    fn exact_match_wins_on_any_row(misses in 0usize..MAX_ATTEMPTS) {
        let mut session = GameSession::standard(Word::new("crane").unwrap());
        for _ in 0..misses {
            submit_word(&mut session, "slate");
        }
        submit_word(&mut session, "crane");

        prop_assert_eq!(session.status(), GameStatus::Won);
        prop_assert_eq!(session.attempts().len(), misses + 1);
    }

    #[test]
    fn short_submit_changes_nothing(typed in 0usize..5) {
        let mut session = GameSession::standard(Word::new("crane").unwrap());
        submit_word(&mut session, "slate");
        for ch in "crane".chars().take(typed) {
            session.append_letter(ch).unwrap();
        }

        let err = session.submit().unwrap_err();
        prop_assert_eq!(err, GameError::IncompleteGuess { entered: typed, required: 5 });
        prop_assert_eq!(session.row(), 1);
        prop_assert_eq!(session.attempts().len(), 1);
        prop_assert_eq!(session.status(), GameStatus::InProgress);
        prop_assert_eq!(session.target().text(), "crane");
    }

    #[test]
    fn invariants_hold_for_any_event_sequence(
        events in proptest::collection::vec(arbitrary_event(), 0..80)
    ) {
        let mut session = GameSession::standard(Word::new("abcd").unwrap());

        for event in events {
            let before_status = session.status();
            let before_attempts = session.attempts().len();
            let before_row = session.row();

            let result = session.dispatch(event);

            prop_assert!(session.input().len() <= session.word_length());
            if session.status() == GameStatus::InProgress {
                prop_assert!(session.row() < session.max_attempts());
            }
            for attempt in session.attempts() {
                prop_assert_eq!(attempt.feedback.len(), 4);
            }

            if before_status.is_over() {
                let is_session_over = matches!(result, Err(GameError::SessionOver { .. }));
                prop_assert!(is_session_over);
                prop_assert_eq!(session.status(), before_status);
                prop_assert_eq!(session.attempts().len(), before_attempts);
                prop_assert_eq!(session.row(), before_row);
            }
        }
    }
}

#[test]
fn repeated_letter_after_match_is_present() {
    let guess = Word::new("aab").unwrap();
    let target = Word::new("abc").unwrap();

    assert_eq!(
        Feedback::calculate(&guess, &target).classifications(),
        &[
            Classification::Correct,
            Classification::Present,
            Classification::Present
        ]
    );
}

#[test]
fn five_misses_then_loss() {
    let mut session = GameSession::standard(Word::new("crane").unwrap());

    for expected_row in 1..=5 {
        submit_word(&mut session, "slate");
        assert_eq!(session.row(), expected_row);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    submit_word(&mut session, "slate");
    assert_eq!(session.status(), GameStatus::Lost);
}

#[test]
fn crane_end_to_end() {
    use Classification::{Absent, Correct, Present};

    let mut session = GameSession::standard(Word::new("crane").unwrap());
    for guess in ["trace", "crone", "crane"] {
        submit_word(&mut session, guess);
    }

    let attempts = session.attempts();
    assert_eq!(attempts.len(), 3);
    assert_eq!(
        attempts[0].feedback.classifications(),
        &[Absent, Correct, Correct, Present, Correct]
    );
    assert_eq!(
        attempts[1].feedback.classifications(),
        &[Correct, Correct, Absent, Correct, Correct]
    );
    assert!(attempts[2].feedback.is_perfect());
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn terminal_session_ignores_input() {
    let mut session = GameSession::standard(Word::new("crane").unwrap());
    for _ in 0..MAX_ATTEMPTS {
        submit_word(&mut session, "slate");
    }
    assert_eq!(session.status(), GameStatus::Lost);

    for event in [
        InputEvent::AppendLetter('c'),
        InputEvent::DeleteLetter,
        InputEvent::Submit,
    ] {
        assert!(session.dispatch(event).unwrap_err().is_ignorable());
    }

    assert_eq!(session.attempts().len(), MAX_ATTEMPTS);
    assert_eq!(session.row(), MAX_ATTEMPTS - 1);
    assert_eq!(session.status(), GameStatus::Lost);
}
