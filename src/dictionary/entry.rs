use serde::{Deserialize, Serialize};

/// One value of the on-disk `word -> {...}` mapping.
///
/// Only `definition` is required; any other fields the file carries are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub definition: String,
}

/// A dictionary word together with its definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub definition: String,
}

impl DictionaryEntry {
    pub fn new<W: Into<String>, D: Into<String>>(word: W, definition: D) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}
