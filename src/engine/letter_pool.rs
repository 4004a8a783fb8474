//! Multiset of available letters.
//!
//! A [`LetterPool`] answers "can this word be spelled from these letters?",
//! spending one occurrence of a letter for each use. One substitution is
//! allowed: a word that needs "ё" may spend an "е" from the pool when no "ё"
//! is left. The reverse is not allowed, so a pool holding "ё" never spells a
//! word that needs "е".

use std::collections::BTreeMap;

const YO: char = 'ё';
const YE: char = 'е';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl LetterPool {
    pub fn from_letters(letters: &str) -> Self {
        let mut pool = Self::default();
        for ch in letters.chars() {
            *pool.counts.entry(ch).or_default() += 1;
            pool.total += 1;
        }
        pool
    }

    /// Total number of letters, counting repeats.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Distinct letters with their multiplicities, in code point order.
    pub fn distinct(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().filter(|(_, n)| **n > 0).map(|(c, n)| (*c, *n))
    }

    fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(n) if *n > 0 => {
                *n -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Spends the letters of `word`. Returns `false` as soon as a letter is
    /// unavailable; the pool is left partially spent in that case.
    pub fn try_consume(&mut self, word: &str) -> bool {
        for ch in word.chars() {
            if self.take(ch) {
                continue;
            }
            if ch == YO && self.take(YE) {
                continue;
            }
            return false;
        }
        true
    }

    /// Checks whether `word` can be spelled without touching this pool.
    pub fn can_form(&self, word: &str) -> bool {
        if word.chars().count() > self.total {
            return false;
        }
        self.clone().try_consume(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let pool = LetterPool::from_letters("колокол");
        assert_eq!(pool.len(), 7);
        assert_eq!(pool.count('о'), 3);
        assert_eq!(pool.count('к'), 2);
        assert_eq!(pool.count('я'), 0);
        let distinct: Vec<(char, usize)> = pool.distinct().collect();
        assert_eq!(distinct, vec![('к', 2), ('л', 2), ('о', 3)]);
    }

    #[test]
    fn test_multiplicity_is_respected() {
        let pool = LetterPool::from_letters("кол");
        assert!(pool.can_form("лок"));
        assert!(!pool.can_form("кок"));
        assert!(LetterPool::from_letters("кокл").can_form("кок"));
    }

    #[test]
    fn test_word_longer_than_pool() {
        assert!(!LetterPool::from_letters("ток").can_form("токи"));
    }

    #[test]
    fn test_yo_accepts_ye_one_way() {
        assert!(LetterPool::from_letters("елка").can_form("ёлка"));
        assert!(!LetterPool::from_letters("ёлка").can_form("елка"));
        assert!(LetterPool::from_letters("ёлка").can_form("ёлка"));
    }

    #[test]
    fn test_real_yo_is_spent_first() {
        // "ёе" must cover both letters of "ёе": ё takes ё, е takes е
        assert!(LetterPool::from_letters("ёе").can_form("ёе"));
        // two ё needed, one ё and one е available
        assert!(LetterPool::from_letters("ёе").can_form("ёё"));
        assert!(!LetterPool::from_letters("ёё").can_form("ее"));
    }

    #[test]
    fn test_can_form_leaves_pool_untouched() {
        let pool = LetterPool::from_letters("ток");
        assert!(pool.can_form("кот"));
        assert_eq!(pool.len(), 3);
    }
}
