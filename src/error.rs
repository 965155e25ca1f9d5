//! Error types for critsit.
//!
//! This module defines the unified error enum used throughout the crate. All fallible
//! operations return `Result<T, Error>`. Callers decide which variants are fatal: the
//! incident log treats load and save failures as log lines, while the CLI turns a
//! missing record into a non-zero exit.

/// Unified error type for all critsit operations.
///
/// - `Io` -> data file could not be read or written, or the browser could not be spawned
/// - `Json` -> data file content is not a JSON array of incident records
/// - `RecordNotFound` -> no record carries the requested identifier
/// - `IdSpaceExhausted` -> a record already carries the largest representable identifier
/// - `InvalidUrl` -> the browser launcher was given something other than an http(s) URL
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred during a file or process operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be parsed, or the records could not be serialized.
    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested incident record does not exist.
    #[error("incident record not found: {id}")]
    RecordNotFound {
        /// Identifier that was looked up.
        id: u64,
    },

    /// No identifier is left for a new record.
    #[error("incident identifier space exhausted")]
    IdSpaceExhausted,

    /// The URL handed to the browser launcher was rejected.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
