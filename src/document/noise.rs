use std::collections::BTreeSet;

use super::document::split_words;

/// Stop words that may never lead a rotation.
///
/// Stored lowercased; lookups fold the queried word the same way, so
/// membership is case-insensitive. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseWordSet {
    words: BTreeSet<String>,
}

impl NoiseWordSet {
    /// Build from whitespace-separated tokens. Tokens may span any number of lines.
    pub fn build(word_list: &str) -> Self {
        let words = split_words(word_list)
            .map(|w| w.to_ascii_lowercase())
            .collect();

        Self { words }
    }

    /// Exact, case-insensitive membership. No prefix or partial matching.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NoiseWordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .flat_map(split_words)
            .map(|w| w.to_ascii_lowercase())
            .collect();

        Self { words }
    }
}
