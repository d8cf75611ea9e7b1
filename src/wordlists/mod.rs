//! Word lists and target word sources
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the `WordSource` trait games draw their target from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use source::{FixedWordSource, RandomWordSource, SourceError, WordSource};
