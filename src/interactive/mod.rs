//! Interactive TUI interface
//!
//! Login screen and game board driven by keyboard events.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
