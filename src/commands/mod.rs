//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckError, CheckResult, check_guess};
pub use simple::{GuessLineError, run_simple, submit_line};
