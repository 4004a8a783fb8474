//! Fixed letter alphabets used to screen user samples and dictionary words.

use std::collections::HashSet;

/// The 33 lowercase letters of the Russian alphabet, in alphabetical order.
pub const RUSSIAN_LETTERS: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// A closed set of letters. Membership is case-insensitive.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: HashSet<char>,
}

impl Alphabet {
    /// Builds an alphabet from the lowercase letters of `letters`.
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// The Russian alphabet, including "ё".
    pub fn russian() -> Self {
        Self::new(RUSSIAN_LETTERS)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Checks a single character, ignoring case.
    pub fn contains(&self, ch: char) -> bool {
        ch.to_lowercase().all(|lower| self.letters.contains(&lower))
    }

    /// Checks that every character of `text` belongs to the alphabet.
    /// The empty string is trivially accepted.
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().all(|ch| self.contains(ch))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}
