//! Core domain types for the game
//!
//! Pure types with no I/O: validated words and the feedback calculation that
//! turns a guess into per-letter classifications.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback};
pub use word::{Word, WordError};
