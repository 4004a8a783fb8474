// Matching engine
//
// This module finds the dictionary words that can be spelled from a validated
// query's letters, using either multiset matching or arrangement enumeration.

pub mod arrangements;
pub mod letter_pool;
pub mod matcher;

pub use arrangements::{count_arrangements, for_each_arrangement};
pub use letter_pool::LetterPool;
pub use matcher::{MatchEngine, MatchResult, MatchStrategy, WordMatch, DEFAULT_MAX_ARRANGEMENTS};
