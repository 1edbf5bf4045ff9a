//! Error types for the Sentira library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`SentiraError`] enum. Variants carry a human-readable description
//! of what went wrong; I/O, CSV, and JSON errors convert automatically.
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::schema("no valid text columns found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentira operations.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse errors (lexicon resources, labels, field values)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Schema errors (missing or unusable columns)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Analysis errors (aggregation produced no usable rows)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentiraError.
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SentiraError::Parse(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SentiraError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SentiraError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentiraError::Other(msg.into())
    }
}
