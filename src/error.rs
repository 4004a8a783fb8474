//! Error types and result type for the wordgen crate.
//!
//! This module defines the error variants that can occur while loading the
//! dictionary, reading configuration, or running the match engine. It uses the
//! `snafu` library for ergonomic error handling with automatic backtrace capture.
//!
//! Rejected user input is deliberately *not* an error: the validator reports it
//! as a [`Rejection`](crate::query::Rejection) value.
//!
//! # Examples
//!
//! ```
//! use wordgen::{Result, WordGenError};
//!
//! fn load_something() -> Result<String> {
//!     Err(WordGenError::invalid_parameter("max_sample_len must be at least 2"))
//! }
//!
//! match load_something() {
//!     Ok(data) => println!("Success: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`WordGenError::Io`]: I/O errors from file operations
//! - [`WordGenError::ParserError`]: JSON parsing errors
//! - [`WordGenError::ResourceNotFound`]: the dictionary file is missing
//! - [`WordGenError::MalformedResource`]: the dictionary file has the wrong shape
//! - [`WordGenError::EmptyResource`]: the dictionary parsed but holds no usable words
//! - [`WordGenError::InvalidParameter`]: invalid configuration values
//! - [`WordGenError::SearchBudgetExceeded`]: permutation search gave up

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the wordgen crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `WordGenError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WordGenError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Error parsing JSON data.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// The dictionary file does not exist.
    #[snafu(display("Файл со словарем русских слов не найден. Проверьте, что он загружен. ({path})"))]
    ResourceNotFound {
        path: String,
        backtrace: Backtrace,
    },

    /// The dictionary file exists but is not a `word -> {definition}` mapping.
    #[snafu(display("Не удается подключить файл со словарем русских слов. Он существует, но не в том формате, что нужен. Возможно, используется неправильный файл. ({message})"))]
    MalformedResource {
        message: String,
        backtrace: Backtrace,
    },

    /// The dictionary file parsed but yielded no usable entries.
    #[snafu(display("Файл со словарем русских слов подключился, но почему-то пуст. Проверьте файл. ({path})"))]
    EmptyResource {
        path: String,
        backtrace: Backtrace,
    },

    /// Function or configuration was given invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// The permutation strategy generated more arrangements than allowed.
    #[snafu(display("Search budget exceeded: more than {limit} arrangements"))]
    SearchBudgetExceeded {
        limit: u64,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for WordGenError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for WordGenError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

/// Helper methods for creating errors without context providers.
impl WordGenError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgen::WordGenError;
    ///
    /// let error = WordGenError::invalid_parameter("max_arrangements cannot be zero");
    /// assert!(error.to_string().contains("max_arrangements"));
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `ResourceNotFound` error for the given path.
    pub fn resource_not_found<S: Into<String>>(path: S) -> Self {
        Self::ResourceNotFound {
            path: path.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MalformedResource` error with the given message.
    pub fn malformed_resource<S: Into<String>>(message: S) -> Self {
        Self::MalformedResource {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `EmptyResource` error for the given path.
    pub fn empty_resource<S: Into<String>>(path: S) -> Self {
        Self::EmptyResource {
            path: path.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `SearchBudgetExceeded` error for the given arrangement limit.
    pub fn search_budget_exceeded(limit: u64) -> Self {
        Self::SearchBudgetExceeded {
            limit,
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks whether this error means the service cannot start at all
    /// (missing, malformed or empty dictionary).
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            WordGenError::ResourceNotFound { .. }
                | WordGenError::MalformedResource { .. }
                | WordGenError::EmptyResource { .. }
        )
    }
}

/// A specialized `Result` type for wordgen operations.
///
/// This is a convenience type alias that uses [`WordGenError`] as the error type.
pub type Result<T> = std::result::Result<T, WordGenError>;
