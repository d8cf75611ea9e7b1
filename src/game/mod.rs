//! Game state controller
//!
//! Sequences raw input events into attempts and decides when a game is won
//! or lost. Sessions are plain values owned by whoever drives the UI loop.

mod error;
mod session;
mod stats;

pub use error::GameError;
pub use session::{Attempt, GameSession, GameStatus, InputEvent, MAX_ATTEMPTS, Update};
pub use stats::Statistics;
