//! Generator configuration.
//!
//! All knobs live in one serde-friendly struct so a deployment can ship a JSON
//! file next to the dictionary instead of recompiling.
//!
//! # Examples
//!
//! ```
//! use wordgen::config::GeneratorConfig;
//! use wordgen::engine::MatchStrategy;
//!
//! let config: GeneratorConfig = serde_json::from_str(r#"{"max_sample_len": 10, "strategy": "permutation"}"#).unwrap();
//! assert_eq!(config.max_sample_len, 10);
//! assert_eq!(config.strategy, MatchStrategy::Permutation);
//! // unspecified fields keep their defaults
//! assert_eq!(config.default_min_length, 3);
//! config.validate().unwrap();
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{MatchStrategy, DEFAULT_MAX_ARRANGEMENTS};
use crate::utils::io_utils::string_from_file;
use crate::{Result, WordGenError};

/// Largest allowed `max_sample_len`.
pub const MAX_SAMPLE_LEN_LIMIT: usize = 32;

/// Well-known dictionary file name, looked up in the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "russian_nouns_with_definition.json";

/// Configuration for the word generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path to the `word -> {definition}` JSON file; relative paths resolve against the working directory
    pub dictionary_path: PathBuf,
    /// Longest accepted letter sample
    pub max_sample_len: usize,
    /// Minimum word length used when the request leaves it out
    pub default_min_length: usize,
    /// Maximum word length used when the request leaves it out
    pub default_max_length: usize,
    /// Matching algorithm
    pub strategy: MatchStrategy,
    /// Arrangement budget for [`MatchStrategy::Permutation`]
    pub max_arrangements: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            max_sample_len: 20,
            default_min_length: 3,
            default_max_length: 6,
            strategy: MatchStrategy::Multiset,
            max_arrangements: DEFAULT_MAX_ARRANGEMENTS,
        }
    }
}

impl GeneratorConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = string_from_file(path)?;
        let config: GeneratorConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_sample_len < 2 {
            return Err(WordGenError::invalid_parameter(format!(
                "max_sample_len must be at least 2, got {}",
                self.max_sample_len
            )));
        }
        if self.max_sample_len > MAX_SAMPLE_LEN_LIMIT {
            return Err(WordGenError::invalid_parameter(format!(
                "max_sample_len must be at most {}, got {}",
                MAX_SAMPLE_LEN_LIMIT, self.max_sample_len
            )));
        }
        if self.default_min_length < 2 || self.default_max_length < 2 {
            return Err(WordGenError::invalid_parameter(
                "default word lengths must be at least 2",
            ));
        }
        if self.default_min_length > self.default_max_length {
            return Err(WordGenError::invalid_parameter(format!(
                "default_min_length ({}) exceeds default_max_length ({})",
                self.default_min_length, self.default_max_length
            )));
        }
        if self.max_arrangements == 0 {
            return Err(WordGenError::invalid_parameter("max_arrangements cannot be zero"));
        }
        Ok(())
    }
}
