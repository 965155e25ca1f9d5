//! Error types for the critsit-console TUI.
//!
//! Defines [`ConsoleError`], the error enum for terminal and logging setup. Incident log
//! failures never reach it: they are handled inside the dispatch step. The top-level
//! `main` wraps this in `anyhow::Result` for convenience.

use thiserror::Error;

/// Error type for critsit-console terminal and log-file operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// An I/O error (terminal operations, log directory, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
