//! Error handling module for the sablet CLI.
//!
//! Structured error types (`thiserror`) for everything a command can fail
//! with; the binary's top level wraps these in `anyhow` for context.

use thiserror::Error;

/// Main error type for the sablet CLI application.
#[derive(Error, Debug)]
pub enum SabletError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input failed to lex cleanly.
    #[error("Lexing failed with {0} error(s)")]
    LexFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SabletError.
pub type Result<T> = std::result::Result<T, SabletError>;
