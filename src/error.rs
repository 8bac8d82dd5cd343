//! Error types for the Lexica library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexicaError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexica::error::{LexicaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexicaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexica operations.
#[derive(Error, Debug)]
pub enum LexicaError {
    /// I/O errors (reading corpora, writing token dumps)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Statistics errors (invalid input to a law analyzer or a fit)
    #[error("Statistics error: {0}")]
    Stats(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexicaError.
pub type Result<T> = std::result::Result<T, LexicaError>;

impl LexicaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexicaError::Analysis(msg.into())
    }

    /// Create a new statistics error.
    pub fn stats<S: Into<String>>(msg: S) -> Self {
        LexicaError::Stats(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexicaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
