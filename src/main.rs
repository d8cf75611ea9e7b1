//! Wordle Client - CLI
//!
//! Word-guessing game with TUI and plain text modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_client::{
    client::{Client, LocalAuthenticator},
    commands::{check_guess, run_simple},
    core::Word,
    game::MAX_ATTEMPTS,
    logging::{LogTarget, init_logging},
    output::print_check_result,
    wordlists::{
        ANSWERS, FixedWordSource, RandomWordSource, WordSource,
        loader::{filter_length, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_client",
    about = "Guess the secret word in six tries with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Only pick secret words with this many letters
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: usize,

    /// Play with a fixed secret word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Restrict logins to NAME:PASSWORD pairs (repeatable; default accepts anyone)
    #[arg(short, long = "user", global = true)]
    users: Vec<String>,

    /// Log filter, e.g. 'info' or 'wordle_client=debug' (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain text mode (one line per guess)
    Simple,

    /// Show the feedback for a single guess
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        target: String,
    },
}

/// Load the word pool based on the -w and -l flags
fn load_words(wordlist: &str, length: Option<usize>) -> Result<Vec<Word>> {
    let words = match wordlist {
        "all" => words_from_slice(ANSWERS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    let words = match length {
        Some(len) => filter_length(words, len),
        None => words,
    };

    if words.is_empty() {
        match length {
            Some(len) => bail!("No {len}-letter words in wordlist '{wordlist}'"),
            None => bail!("Wordlist '{wordlist}' has no valid words"),
        }
    }

    Ok(words)
}

/// Build the secret word source from --word or the word list
fn word_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    if let Some(word) = &cli.word {
        let word = match cli.length {
            Some(len) => Word::with_length(word.as_str(), len),
            None => Word::new(word.as_str()),
        }
        .with_context(|| format!("Invalid --word '{word}'"))?;
        return Ok(Box::new(FixedWordSource::new(word)));
    }

    let words = load_words(&cli.wordlist, cli.length)?;
    tracing::info!(count = words.len(), "word pool loaded");
    Ok(Box::new(RandomWordSource::new(words)))
}

/// Parse NAME:PASSWORD pairs for the authenticator
fn authenticator(users: &[String]) -> Result<LocalAuthenticator> {
    if users.is_empty() {
        return Ok(LocalAuthenticator::open());
    }

    let pairs = users
        .iter()
        .map(|entry| match entry.split_once(':') {
            Some((name, password)) if !name.is_empty() => Ok((name, password)),
            _ => bail!("Invalid --user '{entry}', expected NAME:PASSWORD"),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LocalAuthenticator::with_users(pairs))
}

/// Reject option values that would only fail after login
fn validate(cli: &Cli) -> Result<()> {
    if cli.attempts == 0 {
        bail!("--attempts must be at least 1");
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    validate(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Discard,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&cli.log_level, log_target)?;

    match command {
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Simple => run_simple_command(&cli),
        Commands::Play => run_play_command(&cli),
    }
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut client = Client::new(authenticator(&cli.users)?, word_source(cli)?, cli.attempts);
    run_simple(&mut client)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_client::interactive::{App, run_tui};

    let client = Client::new(authenticator(&cli.users)?, word_source(cli)?, cli.attempts);
    run_tui(App::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_rejected_before_login() {
        let cli = Cli::try_parse_from(["wordle_client", "simple", "--attempts", "0"]).unwrap();
        let err = validate(&cli).unwrap_err();
        assert_eq!(err.to_string(), "--attempts must be at least 1");
    }

    #[test]
    fn default_options_are_valid() {
        let cli = Cli::try_parse_from(["wordle_client"]).unwrap();
        assert!(validate(&cli).is_ok());
        assert_eq!(cli.attempts, MAX_ATTEMPTS);
    }
}
