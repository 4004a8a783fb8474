//! Word matching against the dictionary.
//!
//! Given a validated [`Query`], the [`MatchEngine`] finds every dictionary word
//! whose length lies in the query's window (clamped to the lengths the
//! dictionary actually holds) and whose letters can be taken from the sample.
//! Results are sorted by word length, then alphabetically.
//!
//! Two strategies are available and they are **not** equivalent:
//!
//! - [`MatchStrategy::Multiset`] walks the dictionary words of each eligible
//!   length and checks each one against a [`LetterPool`]. Cost is linear in
//!   the number of candidate words. A word needing "ё" may use an "е" from
//!   the sample, never the other way round.
//! - [`MatchStrategy::Permutation`] enumerates every distinct arrangement of
//!   the sample's letters and looks each one up. Cost grows like a falling
//!   factorial of the sample size, so the engine refuses to start when the
//!   arrangement count exceeds its budget. Lookups are exact, so no "ё"/"е"
//!   substitution happens.
//!
//! # Examples
//!
//! ```
//! use wordgen::dictionary::DictionaryStore;
//! use wordgen::engine::{MatchEngine, MatchStrategy};
//! use wordgen::query::{QueryValidator, RawRequest};
//!
//! # fn main() -> wordgen::Result<()> {
//! let store = DictionaryStore::from_entries(
//!     vec![("ток", "заряды"), ("кот", "животное"), ("кто", "местоимение")],
//!     "inline",
//! )?;
//! let query = QueryValidator::default().validate(&RawRequest::new("отк", 2, 3)).unwrap();
//!
//! let result = MatchEngine::new(&store, MatchStrategy::Multiset).run(&query)?;
//! let words: Vec<&str> = result.matches().iter().map(|m| m.word.as_str()).collect();
//! assert_eq!(words, vec!["кот", "кто", "ток"]);
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use super::arrangements::{count_arrangements, for_each_arrangement};
use super::letter_pool::LetterPool;
use crate::dictionary::DictionaryStore;
use crate::query::Query;
use crate::{Result, WordGenError};

/// Default arrangement budget for [`MatchStrategy::Permutation`].
pub const DEFAULT_MAX_ARRANGEMENTS: u64 = 2_000_000;

/// How candidate words are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Test each dictionary word of an eligible length against the sample's letters.
    #[default]
    Multiset,
    /// Generate every arrangement of the sample's letters and look it up.
    Permutation,
}

/// A matched word with its definition.
///
/// Ordered by number of letters first, then by the word itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    pub definition: String,
}

impl WordMatch {
    pub fn new<W: Into<String>, D: Into<String>>(word: W, definition: D) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// Word length in letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl Ord for WordMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.word.cmp(&other.word))
            .then_with(|| self.definition.cmp(&other.definition))
    }
}

impl PartialOrd for WordMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of a query: some words, or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Found(Vec<WordMatch>),
    Empty,
}

impl MatchResult {
    fn from_unsorted(mut matches: Vec<WordMatch>) -> Self {
        if matches.is_empty() {
            return MatchResult::Empty;
        }
        matches.sort();
        MatchResult::Found(matches)
    }

    pub fn matches(&self) -> &[WordMatch] {
        match self {
            MatchResult::Found(matches) => matches,
            MatchResult::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MatchResult::Empty)
    }

    pub fn into_matches(self) -> Vec<WordMatch> {
        match self {
            MatchResult::Found(matches) => matches,
            MatchResult::Empty => Vec::new(),
        }
    }
}

/// Runs queries against a borrowed, read-only dictionary.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    store: &'a DictionaryStore,
    strategy: MatchStrategy,
    max_arrangements: u64,
}

impl<'a> MatchEngine<'a> {
    pub fn new(store: &'a DictionaryStore, strategy: MatchStrategy) -> Self {
        Self {
            store,
            strategy,
            max_arrangements: DEFAULT_MAX_ARRANGEMENTS,
        }
    }

    /// Sets the most arrangements the permutation strategy may generate per query.
    pub fn with_max_arrangements(mut self, max_arrangements: u64) -> Self {
        self.max_arrangements = max_arrangements;
        self
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// The query's length window intersected with the dictionary's word lengths.
    /// `None` when the intersection is empty.
    pub fn effective_range(&self, query: &Query) -> Option<RangeInclusive<usize>> {
        let low = query.min_length().max(self.store.min_word_length());
        let high = query.max_length().min(self.store.max_word_length());
        (low <= high).then_some(low..=high)
    }

    /// Finds all matching words.
    ///
    /// # Errors
    ///
    /// Only the permutation strategy can fail, with
    /// [`WordGenError::SearchBudgetExceeded`] when the sample has too many
    /// arrangements in the effective window.
    pub fn run(&self, query: &Query) -> Result<MatchResult> {
        let Some(range) = self.effective_range(query) else {
            debug!(
                "Query window {}..={} misses dictionary lengths {}..={}",
                query.min_length(),
                query.max_length(),
                self.store.min_word_length(),
                self.store.max_word_length()
            );
            return Ok(MatchResult::Empty);
        };

        let pool = LetterPool::from_letters(query.sample());
        let matches = match self.strategy {
            MatchStrategy::Multiset => self.run_multiset(&pool, range.clone()),
            MatchStrategy::Permutation => self.run_permutation(&pool, range.clone())?,
        };
        debug!(
            "{:?} search for {:?} in {:?}: {} matches",
            self.strategy,
            query.sample(),
            range,
            matches.len()
        );
        Ok(MatchResult::from_unsorted(matches))
    }

    fn run_multiset(&self, pool: &LetterPool, range: RangeInclusive<usize>) -> Vec<WordMatch> {
        range
            .flat_map(|length| self.store.words_of_length(length))
            .filter(|(word, _)| pool.can_form(word))
            .map(|(word, definition)| WordMatch::new(word, definition))
            .collect()
    }

    fn run_permutation(&self, pool: &LetterPool, range: RangeInclusive<usize>) -> Result<Vec<WordMatch>> {
        let total: u128 = range
            .clone()
            .map(|length| count_arrangements(pool, length))
            .fold(0u128, u128::saturating_add);
        if total > u128::from(self.max_arrangements) {
            return Err(WordGenError::search_budget_exceeded(self.max_arrangements));
        }
        debug!("Enumerating {} arrangements", total);

        let mut matches = Vec::new();
        for length in range {
            for_each_arrangement(pool, length, |candidate| {
                if let Some(definition) = self.store.lookup_definition(candidate) {
                    matches.push(WordMatch::new(candidate, definition));
                }
            });
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Alphabet, QueryValidator, RawRequest};
    use std::sync::Arc;
    use std::thread;

    fn store(words: &[&str]) -> DictionaryStore {
        DictionaryStore::from_entries(words.iter().map(|w| (*w, format!("определение: {}", w))), "test").unwrap()
    }

    fn query(sample: &str, min: i32, max: i32) -> Query {
        QueryValidator::default()
            .validate(&RawRequest::new(sample, min, max))
            .unwrap()
    }

    fn words(result: &MatchResult) -> Vec<&str> {
        result.matches().iter().map(|m| m.word.as_str()).collect()
    }

    #[test]
    fn test_basic_scenario_both_strategies() {
        let store = store(&["кот", "ток", "тк", "кит", "коты"]);
        let q = query("ток", 2, 3);
        for strategy in [MatchStrategy::Multiset, MatchStrategy::Permutation] {
            let result = MatchEngine::new(&store, strategy).run(&q).unwrap();
            assert_eq!(words(&result), vec!["тк", "кот", "ток"], "{:?}", strategy);
            assert_eq!(result.matches()[1].definition, "определение: кот");
        }
    }

    #[test]
    fn test_results_respect_window_and_letters() {
        let store = store(&["ар", "рак", "арка", "карта", "парк", "кара", "рама"]);
        let q = query("каратп", 3, 4);
        let result = MatchEngine::new(&store, MatchStrategy::Multiset).run(&q).unwrap();
        assert_eq!(words(&result), vec!["рак", "арка", "кара", "парк"]);
        let sample = LetterPool::from_letters(q.sample());
        for m in result.matches() {
            assert!((3..=4).contains(&m.len()));
            assert!(sample.can_form(&m.word));
        }
    }

    #[test]
    fn test_ordering_is_by_length_then_word() {
        let store = store(&["трос", "сорт", "рост", "торс", "тор", "рот", "сот", "от"]);
        let result = MatchEngine::new(&store, MatchStrategy::Multiset)
            .run(&query("строй", 2, 4))
            .unwrap();
        let matches = result.matches();
        assert!(matches.windows(2).all(|pair| {
            (pair[0].len(), &pair[0].word) <= (pair[1].len(), &pair[1].word)
        }));
        assert_eq!(words(&result), vec!["от", "рот", "сот", "тор", "рост", "сорт", "торс", "трос"]);
    }

    #[test]
    fn test_yo_rule_is_one_way() {
        let with_ye = store(&["елка"]);
        let result = MatchEngine::new(&with_ye, MatchStrategy::Multiset)
            .run(&query("ёлка", 2, 4))
            .unwrap();
        assert!(result.is_empty());

        let with_yo = store(&["ёлка"]);
        let result = MatchEngine::new(&with_yo, MatchStrategy::Multiset)
            .run(&query("елка", 2, 4))
            .unwrap();
        assert_eq!(words(&result), vec!["ёлка"]);

        // exact lookups only
        let result = MatchEngine::new(&with_yo, MatchStrategy::Permutation)
            .run(&query("елка", 2, 4))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let store = store(&["слон", "жираф"]);
        let result = MatchEngine::new(&store, MatchStrategy::Multiset)
            .run(&query("кот", 2, 3))
            .unwrap();
        assert_eq!(result, MatchResult::Empty);
        assert!(result.into_matches().is_empty());
    }

    #[test]
    fn test_window_is_clamped_to_dictionary_lengths() {
        let store = store(&["кот", "ток"]);
        let engine = MatchEngine::new(&store, MatchStrategy::Multiset);
        assert_eq!(engine.effective_range(&query("котик", 2, 5)), Some(3..=3));
        assert_eq!(engine.effective_range(&query("котик", 4, 5)), None);
        assert!(engine.run(&query("котик", 4, 5)).unwrap().is_empty());
        assert_eq!(words(&engine.run(&query("котик", 2, 5)).unwrap()), vec!["кот", "ток"]);
    }

    #[test]
    fn test_strategies_agree_without_yo() {
        let store = store(&["пар", "рап", "апорт", "порт", "тоа", "трап", "парт", "рот", "спорт", "пост"]);
        let q = query("портап", 2, 5);
        let multiset = MatchEngine::new(&store, MatchStrategy::Multiset).run(&q).unwrap();
        let permutation = MatchEngine::new(&store, MatchStrategy::Permutation).run(&q).unwrap();
        assert_eq!(multiset, permutation);
        assert!(!multiset.is_empty());
    }

    #[test]
    fn test_permutation_budget() {
        let store = store(&["кот"]);
        let q = query("абвгдежзиклмнопрстуф", 2, 10);
        let err = MatchEngine::new(&store, MatchStrategy::Permutation)
            .with_max_arrangements(1_000)
            .run(&q)
            .unwrap_err();
        assert!(matches!(err, WordGenError::SearchBudgetExceeded { limit: 1_000, .. }));

        // the multiset strategy has no such limit
        assert!(MatchEngine::new(&store, MatchStrategy::Multiset).run(&q).is_ok());
    }

    #[test]
    fn test_permutation_budget_with_oversized_sample() {
        let letters = format!("{}{}", "а".repeat(65), "б".repeat(65));
        let store = store(&["аб", "ба", letters.as_str()]);
        let q = QueryValidator::new(Alphabet::russian(), 200, 2, 130)
            .validate(&RawRequest::new(letters.as_str(), 2, 130))
            .unwrap();
        let err = MatchEngine::new(&store, MatchStrategy::Permutation).run(&q).unwrap_err();
        assert!(matches!(err, WordGenError::SearchBudgetExceeded { .. }));
    }

    #[test]
    fn test_idempotent() {
        let store = store(&["кот", "ток", "кто", "окт"]);
        let q = query("котик", 2, 5);
        let engine = MatchEngine::new(&store, MatchStrategy::Multiset);
        assert_eq!(engine.run(&q).unwrap(), engine.run(&q).unwrap());
    }

    #[test]
    fn test_concurrent_queries_share_store() {
        let store = Arc::new(store(&["кот", "ток", "кит", "тик"]));
        let handles: Vec<_> = ["ток", "кит", "котик"]
            .into_iter()
            .map(|sample| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let q = query(sample, 2, 3);
                    MatchEngine::new(&store, MatchStrategy::Multiset).run(&q).unwrap().into_matches().len()
                })
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![2, 2, 4]);
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(serde_json::to_string(&MatchStrategy::Permutation).unwrap(), "\"permutation\"");
        let parsed: MatchStrategy = serde_json::from_str("\"multiset\"").unwrap();
        assert_eq!(parsed, MatchStrategy::Multiset);
    }
}
