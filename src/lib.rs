//! Wordle Client
//!
//! A terminal word-guessing game: log in, receive a secret word, and guess it
//! within six attempts with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_client::core::Word;
//! use wordle_client::game::{GameSession, GameStatus, InputEvent};
//!
//! let mut session = GameSession::standard(Word::new("crane").unwrap());
//! for ch in "crane".chars() {
//!     session.dispatch(InputEvent::AppendLetter(ch)).unwrap();
//! }
//! session.dispatch(InputEvent::Submit).unwrap();
//!
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and target sources
pub mod wordlists;

// Login and session lifecycle
pub mod client;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
