//! Error types and result type for the verborum crate.
//!
//! Every error here is a load-time error: reading session files, parsing their JSON,
//! validating entries and session numbers, or creating the collator. Once an
//! [`EntryStore`](crate::storage::EntryStore) exists, lookups and searches cannot fail.
//! The enum uses the `snafu` library with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use verborum::{LexiconError, Result};
//!
//! fn load_session() -> Result<()> {
//!     Err(LexiconError::invalid_data_format("session1: record 3 has an empty word"))
//! }
//!
//! match load_session() {
//!     Ok(()) => println!("loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`LexiconError::Io`]: I/O errors while reading session files
//! - [`LexiconError::ParserError`]: JSON or number parsing errors
//! - [`LexiconError::InvalidDataFormat`]: Malformed session data
//! - [`LexiconError::InvalidParameter`]: Invalid configuration or arguments
//! - [`LexiconError::IcuError`]: Collator creation or comparison failures
//! - [`LexiconError::DuplicateSession`]: Two sources declare the same session number

use std::io;
use snafu::{Snafu, Backtrace};

use crate::storage::SessionNumber;

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the verborum crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `LexiconError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LexiconError {
    /// I/O error occurred while reading session sources.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Error parsing JSON session data or a numeric session identifier.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Session data is malformed (missing fields, empty headwords, bad file names).
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// Function or configuration was given an invalid value.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// ICU library error during collation or locale operations.
    #[snafu(display("Icu common error: {source}"))]
    IcuError {
        source: crate::utils::icu_wrapper::IcuError,
        backtrace: Backtrace,
    },

    /// The same session number was declared by more than one source.
    #[snafu(display("Duplicate session number: {number}"))]
    DuplicateSession {
        number: SessionNumber,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for LexiconError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for LexiconError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<std::num::ParseIntError> for LexiconError {
    fn from(source: std::num::ParseIntError) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<regex::Error> for LexiconError {
    fn from(source: regex::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<crate::utils::icu_wrapper::IcuError> for LexiconError {
    fn from(source: crate::utils::icu_wrapper::IcuError) -> Self {
        Self::IcuError { source, backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl LexiconError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use verborum::LexiconError;
    ///
    /// let error = LexiconError::invalid_parameter("Session number must be positive");
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidParameter` error for an invalid path.
    pub fn invalid_path<S: Into<String>>(path: S) -> Self {
        Self::InvalidParameter {
            message: format!("Invalid path: {}", path.into()),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `DuplicateSession` error for the given session number.
    pub fn duplicate_session(number: SessionNumber) -> Self {
        Self::DuplicateSession {
            number,
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `DuplicateSession` variant.
    pub fn is_duplicate_session(&self) -> bool {
        matches!(self, LexiconError::DuplicateSession { .. })
    }

    /// Checks if this error came from the collation backend.
    pub fn is_icu_error(&self) -> bool {
        matches!(self, LexiconError::IcuError { .. })
    }
}

/// A specialized `Result` type for verborum operations.
///
/// This is a convenience type alias that uses [`LexiconError`] as the error type.
pub type Result<T> = std::result::Result<T, LexiconError>;
