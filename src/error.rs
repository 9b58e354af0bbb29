//! Error types for the homebank converter library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while detecting, parsing and writing statements.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing CSV records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date field did not match the dialect's date pattern.
    #[error("Invalid date '{value}', expected format {format}")]
    InvalidDate { value: String, format: String },

    /// A transaction row carries neither a credit nor a debit amount.
    #[error("Missing amount in transaction '{memo}'")]
    MissingAmount { memo: String },

    /// Auto-detection found no known input format and none was forced.
    #[error("Unknown input format!")]
    UnknownFormat,

    /// Invalid dialect name specified.
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),
}
