//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as an uppercase tile colored by its classification
#[must_use]
pub fn letter_tile(letter: u8, classification: Classification) -> ColoredString {
    let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match classification {
        Classification::Correct => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.classifications())
        .map(|(&letter, &c)| letter_tile(letter, c).to_string())
        .collect()
}

/// Render the letters typed so far, padded with underscores to the word length
#[must_use]
pub fn pending_row(input: &str, word_length: usize) -> String {
    let mut row: Vec<String> = input
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    row.resize(word_length.max(row.len()), "_".to_string());
    row.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);

        let guess = Word::new("aab").unwrap();
        let target = Word::new("abc").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(colored_guess(&guess, &feedback), " A  A  B ");
    }

    #[test]
    fn pending_row_pads() {
        assert_eq!(pending_row("cr", 5), "C R _ _ _");
        assert_eq!(pending_row("", 3), "_ _ _");
        assert_eq!(pending_row("crane", 5), "C R A N E");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
