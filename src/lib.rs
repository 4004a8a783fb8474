//! # wordgen - Russian word generator
//!
//! This crate finds every dictionary word that can be spelled from a short set
//! of letters, within a requested word-length range, and attaches the
//! dictionary definition to each one.
//!
//! ## Features
//!
//! - **Dictionary store**: load a `word -> {definition}` JSON file once and share it read-only
//! - **Input validation**: normalize letters and report every rejection with a user-facing message
//! - **Multiset matching**: test each candidate word against the available letters
//! - **Permutation matching**: enumerate letter arrangements, with a hard work budget
//! - **Response shape**: a serializable answer ready for a page template or an API
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordgen::{DictionaryStore, GeneratorConfig, RawRequest, WordService};
//!
//! # fn main() -> wordgen::Result<()> {
//! let store = DictionaryStore::from_json_str(
//!     r#"{"кот": {"definition": "животное"}, "ток": {"definition": "заряды"}}"#,
//!     "inline",
//! )?;
//! let service = WordService::new(Arc::new(store), &GeneratorConfig::default());
//!
//! let answer = service.answer(&RawRequest::new("т, о, к", 2, 3));
//! assert!(answer.success);
//! assert_eq!(answer.data.len(), 2);
//! assert_eq!(answer.data[0].word, "кот");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Dictionary**: [`dictionary`] loads and serves the word store
//! - **Query**: [`query`] validates raw input into a [`Query`]
//! - **Engine**: [`engine`] matches queries against the store
//! - **Answer**: [`answer`] ties the pieces together for one request
//! - **Configuration**: [`config`] holds deployment settings
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`] with [`WordGenError`], built on
//! `snafu`. A missing, malformed or empty dictionary is fatal at startup.
//! Rejected input and empty results are ordinary answers, not errors.

pub mod answer;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod query;
pub mod utils;

// Re-export commonly used types for convenience
pub use answer::{WordAnswer, WordService};
pub use config::GeneratorConfig;
pub use dictionary::{DictionaryEntry, DictionaryStore};
pub use engine::{MatchEngine, MatchResult, MatchStrategy, WordMatch};
pub use query::{Query, QueryValidator, RawRequest, Rejection, ViolationKind};

// Re-export error types for convenience
pub use error::{WordGenError, Result, snafu};
