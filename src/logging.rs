//! Tracing subscriber setup
//!
//! `RUST_LOG` takes priority over the configured level. Output goes to a log
//! file when one is given; otherwise to stderr, or nowhere at all while the
//! TUI owns the terminal.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Resolve the filter: `RUST_LOG` if set, else `level`
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global tracing subscriber
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init_logging(level: &str, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };

    // Already initialized (e.g. by a test harness)
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}
