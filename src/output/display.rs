//! Display functions for the line-based front ends

use super::formatters::{colored_guess, create_progress_bar, pending_row};
use crate::commands::CheckResult;
use crate::game::{Attempt, GameSession, GameStatus, Statistics};
use colored::Colorize;

/// Print a submitted row: colored tiles followed by the emoji squares
pub fn print_attempt(attempt: &Attempt, max_attempts: usize) {
    println!(
        "  {}/{}  {}  {}",
        attempt.row + 1,
        max_attempts,
        colored_guess(&attempt.guess, &attempt.feedback),
        attempt.feedback.to_emoji()
    );
}

/// Print every submitted row plus the row being typed
pub fn print_board(session: &GameSession) {
    for attempt in session.attempts() {
        print_attempt(attempt, session.max_attempts());
    }

    if !session.status().is_over() {
        println!(
            "  {}/{}  {}",
            session.row() + 1,
            session.max_attempts(),
            pending_row(session.input(), session.word_length()).bright_black()
        );
    }
}

/// Print the end-of-game banner
pub fn print_outcome(session: &GameSession) {
    println!("\n{}", "═".repeat(60).cyan());
    match session.status() {
        GameStatus::Won => {
            let guesses = session.attempts().len();
            println!(
                "  {}",
                "🎉 You guessed the word! 🎉".bright_green().bold()
            );
            println!(
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!(
                "  {} {}",
                "Game over! The word was:".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }

    println!("\n  Share:");
    for attempt in session.attempts() {
        println!("    {}", attempt.feedback.to_emoji());
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print running statistics with a win distribution
pub fn print_statistics(stats: &Statistics, max_attempts: usize) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played: {}", stats.total_games);
    println!("   Win rate:     {:.0}%", stats.win_rate());

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guesses in 1..=max_attempts {
        let count = stats.wins_in(guesses);
        let bar = create_progress_bar(count as f64, stats.games_won as f64, 30);
        println!("   {guesses}: {} {count:3}", bar.green());
    }
}

/// Print the result of a single guess check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_white().bold()
    );
    println!(
        "  {}  {}  {}",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        result.feedback
    );
    if result.feedback.is_perfect() {
        println!("  {}", "Exact match".bright_green().bold());
    }
}
