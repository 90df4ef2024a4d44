//! Error types for the emoticon library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`EmoticonError`] enum.
//!
//! # Examples
//!
//! ```
//! use emoticon::error::{EmoticonError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EmoticonError::config("empty phrase"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for emoticon operations.
///
/// Uses `thiserror` for the `Error` implementation and provides constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum EmoticonError {
    /// I/O errors (reading config or lookup files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, matching, merging)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors, reported at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// A token index or span bound outside the sequence
    #[error("Index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EmoticonError.
pub type Result<T> = std::result::Result<T, EmoticonError>;

impl EmoticonError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EmoticonError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EmoticonError::Config(msg.into())
    }

    /// Create a new out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        EmoticonError::OutOfRange { index, len }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        EmoticonError::InvalidArgument(msg.into())
    }
}
