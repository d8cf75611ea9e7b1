//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one typed line per guess.

use crate::client::{Authenticator, Client, ClientError, Credentials};
use crate::game::{GameStatus, InputEvent, Statistics, Update};
use crate::output::{print_board, print_outcome, print_statistics};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// Why a typed guess line was not submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessLineError {
    #[error("Letters only, please")]
    NotLetters,
    #[error("Too many letters")]
    TooLong,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Type a whole line into the current row and submit it
///
/// Any letters left over from a rejected line are cleared first.
///
/// # Errors
///
/// Returns `GuessLineError` if the line has non-letters, is longer than the
/// target, or the submission itself is rejected (for example
/// `GameError::IncompleteGuess` for a short line).
pub fn submit_line<A: Authenticator, W: WordSource>(
    client: &mut Client<A, W>,
    line: &str,
) -> Result<Update, GuessLineError> {
    let session = client.session().ok_or(ClientError::NoGame)?;
    let (word_length, pending) = (session.word_length(), session.input().len());

    if !line.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessLineError::NotLetters);
    }
    if line.len() > word_length {
        return Err(GuessLineError::TooLong);
    }

    for _ in 0..pending {
        client.dispatch(InputEvent::DeleteLetter)?;
    }
    for ch in line.chars() {
        client.dispatch(InputEvent::AppendLetter(ch))?;
    }
    Ok(client.dispatch(InputEvent::Submit)?)
}

enum Flow {
    Continue,
    Logout,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a game
/// cannot be started.
pub fn run_simple<A: Authenticator, W: WordSource>(client: &mut Client<A, W>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Text Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut stats = Statistics::default();

    loop {
        if !login_prompt(client)? {
            break;
        }

        match play_until_logout(client, &mut stats)? {
            Flow::Logout => {
                client.logout();
                println!("\n{}\n", "Logged out successfully!".green());
            }
            Flow::Quit | Flow::Continue => break,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Ask for credentials until login succeeds. Returns false on quit or EOF.
fn login_prompt<A: Authenticator, W: WordSource>(client: &mut Client<A, W>) -> Result<bool> {
    loop {
        let Some(username) = get_user_input("Username")? else {
            return Ok(false);
        };
        if username == "quit" {
            return Ok(false);
        }
        let Some(password) = get_user_input("Password")? else {
            return Ok(false);
        };

        match client.login(&Credentials::new(username, password)) {
            Ok(()) => {
                println!("{}\n", "Login successful!".green());
                return Ok(true);
            }
            Err(e) => println!("{}\n", e.to_string().red()),
        }
    }
}

fn play_until_logout<A: Authenticator, W: WordSource>(
    client: &mut Client<A, W>,
    stats: &mut Statistics,
) -> Result<Flow> {
    println!("Commands: 'quit' to exit, 'new' for a new game, 'logout' to log out\n");

    loop {
        let session = client.start_game()?;
        let max_attempts = session.max_attempts();
        println!("Guess the {}-letter word!\n", session.word_length());

        match play_one_game(client)? {
            Flow::Continue => {}
            other => return Ok(other),
        }

        if let Some(session) = client.session()
            && stats.record(session)
        {
            print_outcome(session);
            print_statistics(stats, max_attempts);
        }

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            "logout" => return Ok(Flow::Logout),
            _ => return Ok(Flow::Quit),
        }
    }
}

/// Read guesses until the game ends (`Continue`) or the player leaves
fn play_one_game<A: Authenticator, W: WordSource>(client: &mut Client<A, W>) -> Result<Flow> {
    loop {
        let Some(input) = get_user_input("Guess")? else {
            return Ok(Flow::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "logout" => return Ok(Flow::Logout),
            "new" => {
                client.start_game()?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            line => match submit_line(client, line) {
                Ok(Update::Submitted { status, .. }) => {
                    if let Some(session) = client.session() {
                        print_board(session);
                    }
                    if status != GameStatus::InProgress {
                        return Ok(Flow::Continue);
                    }
                }
                Ok(_) => {}
                Err(GuessLineError::Client(ClientError::Game(e))) if e.is_ignorable() => {
                    tracing::debug!(error = %e, "ignored input after game end");
                    return Ok(Flow::Continue);
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
        println!();
    }
}

/// Get user input with a prompt. Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LocalAuthenticator;
    use crate::core::Word;
    use crate::game::GameError;
    use crate::wordlists::FixedWordSource;

    fn playing_client(target: &str) -> Client<LocalAuthenticator, FixedWordSource> {
        let mut client = Client::new(
            LocalAuthenticator::open(),
            FixedWordSource::new(Word::new(target).unwrap()),
            6,
        );
        client.login(&Credentials::new("ana", "pw")).unwrap();
        client.start_game().unwrap();
        client
    }

    #[test]
    fn submit_line_plays_a_row() {
        let mut client = playing_client("crane");
        let update = submit_line(&mut client, "TRACE").unwrap();

        assert!(matches!(
            update,
            Update::Submitted {
                status: GameStatus::InProgress,
                ..
            }
        ));
        assert_eq!(client.session().unwrap().row(), 1);
    }

    #[test]
    fn submit_line_short_is_incomplete() {
        let mut client = playing_client("crane");
        let err = submit_line(&mut client, "cra").unwrap_err();

        assert_eq!(err.to_string(), "Not enough letters");
        assert_eq!(client.session().unwrap().row(), 0);
    }

    #[test]
    fn submit_line_clears_leftovers() {
        let mut client = playing_client("crane");
        submit_line(&mut client, "cra").unwrap_err();
        submit_line(&mut client, "crane").unwrap();

        assert_eq!(client.session().unwrap().status(), GameStatus::Won);
    }

    #[test]
    fn submit_line_rejects_bad_lines() {
        let mut client = playing_client("crane");
        assert_eq!(
            submit_line(&mut client, "cr4ne"),
            Err(GuessLineError::NotLetters)
        );
        assert_eq!(
            submit_line(&mut client, "cranes"),
            Err(GuessLineError::TooLong)
        );
        assert!(client.session().unwrap().attempts().is_empty());
    }

    #[test]
    fn submit_line_after_win_is_session_over() {
        let mut client = playing_client("crane");
        submit_line(&mut client, "crane").unwrap();

        let err = submit_line(&mut client, "slate").unwrap_err();
        assert!(matches!(
            err,
            GuessLineError::Client(ClientError::Game(GameError::SessionOver { .. }))
        ));
        assert_eq!(client.session().unwrap().attempts().len(), 1);
    }

    #[test]
    fn submit_line_without_game() {
        let mut client = Client::new(
            LocalAuthenticator::open(),
            FixedWordSource::new(Word::new("crane").unwrap()),
            6,
        );
        assert_eq!(
            submit_line(&mut client, "crane"),
            Err(GuessLineError::Client(ClientError::NoGame))
        );
    }
}
