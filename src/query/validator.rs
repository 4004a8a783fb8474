//! Validation of raw user input into a [`Query`].
//!
//! Input arrives as a [`RawRequest`]: a letter sample plus an optional
//! minimum and maximum word length, each of which may be a number or the
//! string an HTML form submitted. Validation runs in two stages:
//!
//! 1. **Field stage**: each supplied length must be an integer greater than 1.
//!    All field problems are reported together.
//! 2. **Rule stage**: the normalized sample and the lengths are checked against
//!    the ordered rules below, stopping at the first one that fails so the user
//!    always sees the most fundamental problem first.
//!
//! | Order | Kind | Condition |
//! |---|---|---|
//! | 1 | [`ViolationKind::InvalidAlphabet`] | a character outside the alphabet |
//! | 2 | [`ViolationKind::SampleTooShort`] | sample length <= 1 |
//! | 3 | [`ViolationKind::MaxExceedsSample`] | max length > sample length |
//! | 4 | [`ViolationKind::MinExceedsSample`] | min length > sample length |
//! | 5 | [`ViolationKind::SampleTooLong`] | sample length > cap |
//! | 6 | [`ViolationKind::RangeInverted`] | min length > max length |
//!
//! # Examples
//!
//! ```
//! use wordgen::query::{QueryValidator, RawRequest, ViolationKind};
//!
//! let validator = QueryValidator::default();
//!
//! let query = validator.validate(&RawRequest::new("Т, о. К", 2, 3)).unwrap();
//! assert_eq!(query.sample(), "ток");
//!
//! let rejection = validator.validate(&RawRequest::new("123", 2, 3)).unwrap_err();
//! assert_eq!(rejection.kinds(), vec![ViolationKind::InvalidAlphabet]);
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use super::alphabet::Alphabet;

/// Separator characters removed from the sample before validation.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ,._]").expect("separator pattern is valid"));

/// A word length as submitted: forms send strings, JSON clients send numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthInput {
    Number(i64),
    Text(String),
}

impl From<i64> for LengthInput {
    fn from(value: i64) -> Self {
        LengthInput::Number(value)
    }
}

impl From<i32> for LengthInput {
    fn from(value: i32) -> Self {
        LengthInput::Number(i64::from(value))
    }
}

impl From<&str> for LengthInput {
    fn from(value: &str) -> Self {
        LengthInput::Text(value.to_string())
    }
}

impl From<String> for LengthInput {
    fn from(value: String) -> Self {
        LengthInput::Text(value)
    }
}

impl LengthInput {
    /// Parses the value. Blank text counts as "not supplied".
    fn parse(&self) -> Option<Option<i64>> {
        match self {
            LengthInput::Number(n) => Some(Some(*n)),
            LengthInput::Text(text) if text.trim().is_empty() => Some(None),
            LengthInput::Text(text) => text.trim().parse::<i64>().ok().map(Some),
        }
    }
}

/// Unvalidated request as received from the outer layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequest {
    pub sample: String,
    #[serde(default, alias = "result_min")]
    pub min_length: Option<LengthInput>,
    #[serde(default, alias = "result_max")]
    pub max_length: Option<LengthInput>,
}

impl RawRequest {
    pub fn new<S, A, B>(sample: S, min_length: A, max_length: B) -> Self
    where
        S: Into<String>,
        A: Into<LengthInput>,
        B: Into<LengthInput>,
    {
        Self {
            sample: sample.into(),
            min_length: Some(min_length.into()),
            max_length: Some(max_length.into()),
        }
    }

    /// A request carrying only letters; lengths fall back to the configured defaults.
    pub fn with_sample<S: Into<String>>(sample: S) -> Self {
        Self {
            sample: sample.into(),
            ..Default::default()
        }
    }
}

/// A validated request. Can only be produced by [`QueryValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    sample: String,
    min_length: usize,
    max_length: usize,
}

impl Query {
    /// The normalized sample: lowercase, separators removed, letter multiplicity kept.
    pub fn sample(&self) -> &str {
        &self.sample
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of letters in the sample.
    pub fn sample_len(&self) -> usize {
        self.sample.chars().count()
    }
}

/// The rule a rejected request broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    InvalidLength,
    InvalidAlphabet,
    SampleTooShort,
    MaxExceedsSample,
    MinExceedsSample,
    SampleTooLong,
    RangeInverted,
}

/// One failed rule with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn new<S: Into<String>>(kind: ViolationKind, message: S) -> Self {
        Self { kind, message: message.into() }
    }
}

/// A request that did not pass validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The sample exactly as it was submitted.
    pub sample: String,
    pub violations: Vec<Violation>,
}

impl Rejection {
    /// All violation messages joined with `", "`.
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(|v| v.kind).collect()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Removes separators (space, comma, period, underscore) and lowercases.
pub fn normalize_sample(raw: &str) -> String {
    SEPARATORS.replace_all(raw, "").to_lowercase()
}

/// Turns [`RawRequest`]s into [`Query`]s or [`Rejection`]s.
#[derive(Debug, Clone)]
pub struct QueryValidator {
    alphabet: Alphabet,
    max_sample_len: usize,
    default_min_length: usize,
    default_max_length: usize,
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl QueryValidator {
    pub fn new(alphabet: Alphabet, max_sample_len: usize, default_min_length: usize, default_max_length: usize) -> Self {
        Self {
            alphabet,
            max_sample_len,
            default_min_length,
            default_max_length,
        }
    }

    /// Russian alphabet with the cap and defaults taken from `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            Alphabet::russian(),
            config.max_sample_len,
            config.default_min_length,
            config.default_max_length,
        )
    }

    pub fn max_sample_len(&self) -> usize {
        self.max_sample_len
    }

    pub fn validate(&self, request: &RawRequest) -> std::result::Result<Query, Rejection> {
        let reject = |violations: Vec<Violation>| Rejection {
            sample: request.sample.clone(),
            violations,
        };

        let mut field_violations = Vec::new();
        let min_length = Self::parse_length(
            request.min_length.as_ref(),
            self.default_min_length,
            "Минимальная длина результата должна быть целым числом больше 1.",
            &mut field_violations,
        );
        let max_length = Self::parse_length(
            request.max_length.as_ref(),
            self.default_max_length,
            "Максимальная длина результата должна быть целым числом больше 1.",
            &mut field_violations,
        );
        if !field_violations.is_empty() {
            return Err(reject(field_violations));
        }

        let sample = normalize_sample(&request.sample);
        match self.check_rules(&sample, min_length, max_length) {
            Some(violation) => Err(reject(vec![violation])),
            None => Ok(Query {
                sample,
                min_length,
                max_length,
            }),
        }
    }

    fn parse_length(
        input: Option<&LengthInput>,
        default: usize,
        message: &str,
        violations: &mut Vec<Violation>,
    ) -> usize {
        let parsed = match input {
            None => Some(None),
            Some(value) => value.parse(),
        };
        match parsed {
            Some(None) => default,
            Some(Some(n)) if n > 1 => n as usize,
            _ => {
                violations.push(Violation::new(ViolationKind::InvalidLength, message));
                default
            }
        }
    }

    fn check_rules(&self, sample: &str, min_length: usize, max_length: usize) -> Option<Violation> {
        let sample_len = sample.chars().count();

        if !self.alphabet.accepts(sample) {
            let message = if sample.chars().all(char::is_alphabetic) {
                "Для создания слов нам нужны только русские буквы. Иначе никак."
            } else {
                "Для создания слов нужно указать только буквы. Цифры и прочие символы не нужны."
            };
            return Some(Violation::new(ViolationKind::InvalidAlphabet, message));
        }

        if sample_len <= 1 {
            return Some(Violation::new(
                ViolationKind::SampleTooShort,
                "Мы не сможем сгенерировать слова из 1 буквы",
            ));
        }

        if max_length > sample_len {
            return Some(Violation::new(
                ViolationKind::MaxExceedsSample,
                "Неправильно заданы условия. Букв должно быть больше или равно, чем максимальная длина результата. \
                 Например: буквы \"ПРИВЕТ\" могут дать слова максимум в 6 символов.",
            ));
        }

        if min_length > sample_len {
            return Some(Violation::new(
                ViolationKind::MinExceedsSample,
                "Неправильно заданы условия. Букв должно быть больше или равно, чем минимальная длина результата. \
                 Например: буквы \"ДА\" не смогут дать слова длиннее 2 символов.",
            ));
        }

        if sample_len > self.max_sample_len {
            return Some(Violation::new(
                ViolationKind::SampleTooLong,
                format!(
                    "Слишком много букв ({}). Мы будем создавать слова очень долго. \
                     Поэтому используйте максимум {} букв. Простите за такое ограничение.",
                    sample_len, self.max_sample_len
                ),
            ));
        }

        if min_length > max_length {
            return Some(Violation::new(
                ViolationKind::RangeInverted,
                "Длина минимального результата не может быть больше длины максимального. \
                 Проверьте, не перепутали ли вы значения местами.",
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(request: RawRequest) -> Vec<ViolationKind> {
        QueryValidator::default().validate(&request).unwrap_err().kinds()
    }

    #[test]
    fn test_normalization_strips_separators_and_lowercases() {
        assert_eq!(normalize_sample("П р,и.в_Е т"), "привет");
        let query = QueryValidator::default()
            .validate(&RawRequest::new("Ё, Л. К_А", 2, 4))
            .unwrap();
        assert_eq!(query.sample(), "ёлка");
        assert_eq!(query.sample_len(), 4);
        assert_eq!((query.min_length(), query.max_length()), (2, 4));
    }

    #[test]
    fn test_multiplicity_is_kept() {
        let query = QueryValidator::default()
            .validate(&RawRequest::new("ааб", 2, 3))
            .unwrap();
        assert_eq!(query.sample(), "ааб");
    }

    #[test]
    fn test_invalid_alphabet() {
        assert_eq!(kinds_of(RawRequest::new("123", 2, 3)), vec![ViolationKind::InvalidAlphabet]);
        assert_eq!(kinds_of(RawRequest::new("hello", 2, 3)), vec![ViolationKind::InvalidAlphabet]);
        assert_eq!(kinds_of(RawRequest::new("кот!", 2, 3)), vec![ViolationKind::InvalidAlphabet]);
    }

    #[test]
    fn test_invalid_alphabet_messages_differ() {
        let validator = QueryValidator::default();
        let digits = validator.validate(&RawRequest::new("123", 2, 3)).unwrap_err();
        let latin = validator.validate(&RawRequest::new("abc", 2, 3)).unwrap_err();
        assert!(digits.message().contains("Цифры"));
        assert!(latin.message().contains("русские"));
    }

    #[test]
    fn test_sample_too_short() {
        assert_eq!(kinds_of(RawRequest::new("а", 2, 3)), vec![ViolationKind::SampleTooShort]);
        assert_eq!(kinds_of(RawRequest::new(" ", 2, 3)), vec![ViolationKind::SampleTooShort]);
    }

    #[test]
    fn test_max_and_min_exceed_sample() {
        assert_eq!(kinds_of(RawRequest::new("кот", 2, 4)), vec![ViolationKind::MaxExceedsSample]);
        // max fits, min does not: the range is inverted too, but the min rule comes first
        assert_eq!(kinds_of(RawRequest::new("кот", 4, 3)), vec![ViolationKind::MinExceedsSample]);
    }

    #[test]
    fn test_sample_too_long() {
        let sample = "а".repeat(21);
        let rejection = QueryValidator::default()
            .validate(&RawRequest::new(sample, 2, 6))
            .unwrap_err();
        assert_eq!(rejection.kinds(), vec![ViolationKind::SampleTooLong]);
        assert!(rejection.message().contains("(21)"));
        assert!(rejection.message().contains("20"));

        let at_cap = "а".repeat(20);
        assert!(QueryValidator::default().validate(&RawRequest::new(at_cap, 2, 6)).is_ok());
    }

    #[test]
    fn test_range_inverted() {
        assert_eq!(kinds_of(RawRequest::new("приветик", 5, 2)), vec![ViolationKind::RangeInverted]);
    }

    #[test]
    fn test_defaults_apply_when_lengths_absent() {
        let query = QueryValidator::default()
            .validate(&RawRequest::with_sample("приветик"))
            .unwrap();
        assert_eq!((query.min_length(), query.max_length()), (3, 6));

        let blank = RawRequest {
            sample: "приветик".to_string(),
            min_length: Some(LengthInput::from("")),
            max_length: Some(LengthInput::from(" 5 ")),
        };
        let query = QueryValidator::default().validate(&blank).unwrap();
        assert_eq!((query.min_length(), query.max_length()), (3, 5));
    }

    #[test]
    fn test_invalid_lengths_are_collected() {
        let request = RawRequest::new("приветик", "два", 1);
        let rejection = QueryValidator::default().validate(&request).unwrap_err();
        assert_eq!(
            rejection.kinds(),
            vec![ViolationKind::InvalidLength, ViolationKind::InvalidLength]
        );
        assert!(rejection.message().contains(", "));
        assert_eq!(rejection.sample, "приветик");
    }

    #[test]
    fn test_raw_request_from_form_json() {
        let request: RawRequest =
            serde_json::from_str(r#"{"sample": "ток", "result_min": "2", "result_max": 3}"#).unwrap();
        assert_eq!(request.min_length, Some(LengthInput::Text("2".to_string())));
        assert_eq!(request.max_length, Some(LengthInput::Number(3)));
        let query = QueryValidator::default().validate(&request).unwrap();
        assert_eq!((query.min_length(), query.max_length()), (2, 3));
    }
}
