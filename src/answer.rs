//! End-to-end request handling and the response shape handed to the page renderer.
//!
//! A [`WordService`] owns the shared dictionary and turns a [`RawRequest`]
//! into a [`WordAnswer`]. Every outcome is an answer, never an error:
//!
//! | Outcome | `success` | `message` | `data` |
//! |---|---|---|---|
//! | words found | `true` | `"OK"` | sorted words |
//! | no words | `false` | [`MESSAGE_NO_MATCHES`] | empty |
//! | rejected input | `false` | joined validation messages | empty |
//! | internal fault | `false` | [`MESSAGE_INTERNAL_FAULT`] | empty |

use std::sync::Arc;

use log::error;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::dictionary::DictionaryStore;
use crate::engine::{MatchEngine, MatchResult, MatchStrategy, WordMatch};
use crate::query::{QueryValidator, RawRequest, Rejection};
use crate::Result;

pub const MESSAGE_OK: &str = "OK";

pub const MESSAGE_NO_MATCHES: &str =
    "Не получилось создать слова из предоставленных букв заданной длины. Попробуйте другие буквы и другую длину.";

pub const MESSAGE_INTERNAL_FAULT: &str =
    "Не получилось обработать запрос. Попробуйте другие буквы или повторите попытку позже.";

/// Response for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAnswer {
    pub success: bool,
    /// Normalized sample for accepted requests, the raw input for rejected ones
    pub sample: String,
    pub message: String,
    pub data: Vec<WordMatch>,
}

impl WordAnswer {
    pub fn found(sample: &str, data: Vec<WordMatch>) -> Self {
        Self {
            success: true,
            sample: sample.to_string(),
            message: MESSAGE_OK.to_string(),
            data,
        }
    }

    pub fn no_matches(sample: &str) -> Self {
        Self::failure(sample, MESSAGE_NO_MATCHES)
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self::failure(&rejection.sample, rejection.message())
    }

    pub fn internal_fault(sample: &str) -> Self {
        Self::failure(sample, MESSAGE_INTERNAL_FAULT)
    }

    fn failure<S: Into<String>>(sample: &str, message: S) -> Self {
        Self {
            success: false,
            sample: sample.to_string(),
            message: message.into(),
            data: Vec::new(),
        }
    }
}

/// Validates requests and runs them against a shared dictionary.
///
/// Cloning is cheap: clones share the same dictionary.
#[derive(Debug, Clone)]
pub struct WordService {
    store: Arc<DictionaryStore>,
    validator: QueryValidator,
    strategy: MatchStrategy,
    max_arrangements: u64,
}

impl WordService {
    pub fn new(store: Arc<DictionaryStore>, config: &GeneratorConfig) -> Self {
        Self {
            store,
            validator: QueryValidator::from_config(config),
            strategy: config.strategy,
            max_arrangements: config.max_arrangements,
        }
    }

    /// Validates `config` and loads the dictionary it points to.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-parameter error for a bad configuration, or with
    /// one of the startup-fatal dictionary errors.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let store = DictionaryStore::load(&config.dictionary_path)?;
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    pub fn answer(&self, request: &RawRequest) -> WordAnswer {
        let query = match self.validator.validate(request) {
            Ok(query) => query,
            Err(rejection) => return WordAnswer::rejected(&rejection),
        };

        let engine = MatchEngine::new(&self.store, self.strategy).with_max_arrangements(self.max_arrangements);
        match engine.run(&query) {
            Ok(MatchResult::Found(matches)) => WordAnswer::found(query.sample(), matches),
            Ok(MatchResult::Empty) => WordAnswer::no_matches(query.sample()),
            Err(e) => {
                error!("Matching {:?} failed: {}", query.sample(), e);
                WordAnswer::internal_fault(query.sample())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn service(strategy: MatchStrategy) -> WordService {
        let store = DictionaryStore::from_entries(
            vec![("кот", "животное"), ("ток", "заряды"), ("тк", "сокращение"), ("елка", "дерево")],
            "test",
        )
        .unwrap();
        let config = GeneratorConfig {
            strategy,
            ..Default::default()
        };
        WordService::new(Arc::new(store), &config)
    }

    #[test]
    fn test_success_answer() {
        let answer = service(MatchStrategy::Multiset).answer(&RawRequest::new("Т О К", 2, 3));
        assert!(answer.success);
        assert_eq!(answer.sample, "ток");
        assert_eq!(answer.message, MESSAGE_OK);
        assert_eq!(
            answer.data,
            vec![
                WordMatch::new("тк", "сокращение"),
                WordMatch::new("кот", "животное"),
                WordMatch::new("ток", "заряды"),
            ]
        );
    }

    #[test]
    fn test_no_matches_answer() {
        let answer = service(MatchStrategy::Multiset).answer(&RawRequest::new("ёлка", 2, 4));
        assert!(!answer.success);
        assert_eq!(answer.sample, "ёлка");
        assert_eq!(answer.message, MESSAGE_NO_MATCHES);
        assert!(answer.data.is_empty());
    }

    #[test]
    fn test_rejected_answer_keeps_raw_sample() {
        let answer = service(MatchStrategy::Multiset).answer(&RawRequest::new("12 3", 2, 3));
        assert!(!answer.success);
        assert_eq!(answer.sample, "12 3");
        assert!(answer.message.contains("только буквы"));
        assert!(answer.data.is_empty());
    }

    #[test]
    fn test_internal_fault_answer() {
        let store = DictionaryStore::from_entries(vec![("кот", "животное")], "test").unwrap();
        let config = GeneratorConfig {
            strategy: MatchStrategy::Permutation,
            max_arrangements: 1,
            ..Default::default()
        };
        let answer = WordService::new(Arc::new(store), &config).answer(&RawRequest::new("ток", 2, 3));
        assert!(!answer.success);
        assert_eq!(answer.message, MESSAGE_INTERNAL_FAULT);
        assert!(!answer.message.contains("arrangements"));
    }

    #[test]
    fn test_answer_json_shape() {
        let answer = service(MatchStrategy::Permutation).answer(&RawRequest::new("кот", 3, 3));
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "sample": "кот",
                "message": "OK",
                "data": [
                    {"word": "кот", "definition": "животное"},
                    {"word": "ток", "definition": "заряды"}
                ]
            })
        );
    }

    #[test]
    fn test_from_config_loads_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"кот": {{"definition": "животное"}}, "ток": {{"definition": "заряды"}}}}"#).unwrap();
        let config = GeneratorConfig {
            dictionary_path: file.path().to_path_buf(),
            default_min_length: 2,
            default_max_length: 3,
            ..Default::default()
        };
        let service = WordService::from_config(&config).unwrap();
        assert_eq!(service.store().len(), 2);
        let answer = service.answer(&RawRequest::with_sample("кот"));
        assert_eq!(answer.data.len(), 2);
    }

    #[test]
    fn test_from_config_missing_dictionary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            dictionary_path: dir.path().join("nope.json"),
            ..Default::default()
        };
        let err = WordService::from_config(&config).unwrap_err();
        assert!(err.is_startup_fatal());
    }
}
