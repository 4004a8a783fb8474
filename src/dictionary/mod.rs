// Dictionary storage
//
// This module loads the static `word -> definition` resource and exposes it as
// an immutable, thread-shareable store.

pub mod entry;
pub mod store;

pub use entry::{DictionaryEntry, RawEntry};
pub use store::{DictionaryStore, MIN_STORED_WORD_LENGTH};
