//! Read-only word store backing every query.
//!
//! The store is loaded once at process start from a JSON object that maps each
//! word to an object with at least a `definition` string:
//!
//! ```json
//! {
//!     "кот": {"definition": "Домашнее животное семейства кошачьих."},
//!     "ток": {"definition": "Движение электрических зарядов."}
//! }
//! ```
//!
//! Words are trimmed and lowercased on load. Words shorter than two letters or
//! containing characters outside the alphabet are dropped, and when two keys
//! collapse to the same lowercase word the first one wins. The shortest and
//! longest surviving word lengths are computed once and reused to clamp every
//! query's length window.
//!
//! # Examples
//!
//! ```
//! use wordgen::dictionary::DictionaryStore;
//!
//! let store = DictionaryStore::from_json_str(
//!     r#"{"Кот": {"definition": "животное"}, "ток": {"definition": "заряды"}}"#,
//!     "inline",
//! ).unwrap();
//!
//! assert!(store.contains("кот"));
//! assert_eq!(store.lookup_definition("ток"), Some("заряды"));
//! assert_eq!((store.min_word_length(), store.max_word_length()), (3, 3));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, info, warn};

use super::entry::{DictionaryEntry, RawEntry};
use crate::query::Alphabet;
use crate::utils::io_utils::{resolve_resource_path, string_from_file};
use crate::{Result, WordGenError};

/// Words shorter than this are never stored.
pub const MIN_STORED_WORD_LENGTH: usize = 2;

/// Immutable `word -> definition` mapping with precomputed length bounds.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    entries: IndexMap<String, String>,
    /// word length (in letters) -> positions in `entries`
    by_length: BTreeMap<usize, Vec<usize>>,
    min_word_length: usize,
    max_word_length: usize,
    origin: String,
}

impl DictionaryStore {
    /// Loads the dictionary from a JSON file.
    ///
    /// Relative paths are resolved against the current working directory.
    ///
    /// # Errors
    ///
    /// - [`WordGenError::ResourceNotFound`] if the file does not exist
    /// - [`WordGenError::MalformedResource`] if it is not a `word -> {definition}` object
    /// - [`WordGenError::EmptyResource`] if no usable word survives loading
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = resolve_resource_path(path)?;
        let origin = path.display().to_string();
        if !path.is_file() {
            return Err(WordGenError::resource_not_found(origin));
        }
        let text = string_from_file(&path)?;
        Self::from_json_str(&text, &origin)
    }

    /// Parses a dictionary from JSON text. `origin` is only used in messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        let raw: IndexMap<String, RawEntry> = serde_json::from_str(json)
            .map_err(|e| WordGenError::malformed_resource(e.to_string()))?;
        Self::from_entries(raw.into_iter().map(|(word, entry)| (word, entry.definition)), origin)
    }

    /// Builds a store from `(word, definition)` pairs.
    pub fn from_entries<I, W, D>(entries: I, origin: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        let alphabet = Alphabet::russian();
        let mut map = IndexMap::<String, String>::new();
        let mut dropped = 0usize;

        for (word, definition) in entries {
            let word = word.as_ref().trim().to_lowercase();
            if word.chars().count() < MIN_STORED_WORD_LENGTH || !alphabet.accepts(&word) {
                debug!("Skipping dictionary word {:?}", word);
                dropped += 1;
                continue;
            }
            match map.entry(word) {
                Entry::Occupied(e) => {
                    debug!("Duplicate dictionary word {:?}, keeping the first definition", e.key());
                    dropped += 1;
                }
                Entry::Vacant(e) => {
                    e.insert(definition.into());
                }
            }
        }

        if dropped > 0 {
            warn!("Dropped {} unusable or duplicate entries from {}", dropped, origin);
        }
        if map.is_empty() {
            return Err(WordGenError::empty_resource(origin));
        }

        let mut by_length = BTreeMap::<usize, Vec<usize>>::new();
        for (index, word) in map.keys().enumerate() {
            by_length.entry(word.chars().count()).or_default().push(index);
        }
        // non-empty map guarantees both bounds exist
        let min_word_length = by_length.keys().next().copied().unwrap_or(MIN_STORED_WORD_LENGTH);
        let max_word_length = by_length.keys().next_back().copied().unwrap_or(min_word_length);

        info!(
            "Loaded {} words from {} (lengths {}..={})",
            map.len(),
            origin,
            min_word_length,
            max_word_length
        );

        Ok(Self {
            entries: map,
            by_length,
            min_word_length,
            max_word_length,
            origin: origin.to_string(),
        })
    }

    pub fn lookup_definition(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Length of the shortest stored word, in letters.
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Length of the longest stored word, in letters.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the store was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// All `(word, definition)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// All `(word, definition)` pairs whose word has exactly `length` letters, in load order.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = (&str, &str)> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.entries.get_index(index))
            .map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// Owned copy of a single entry.
    pub fn entry(&self, word: &str) -> Option<DictionaryEntry> {
        self.entries
            .get_key_value(word)
            .map(|(w, d)| DictionaryEntry::new(w.as_str(), d.as_str()))
    }
}
