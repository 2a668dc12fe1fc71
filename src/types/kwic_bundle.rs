use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::config::IndexConfig;
use crate::types::identifiers::SourceVersion;

/// One circular shift of a line, reconstituted as text.
///
/// Owns its text; it is never a view into the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    pub text: String,
    /// 1-based line number in the input document.
    pub line_number: usize,
    /// How many words were moved from the front of the line to the back.
    pub offset: usize,
}

impl Rotation {
    /// Build the rotation of `words` that starts at `offset`.
    ///
    /// Words are joined by single spaces: `words[offset..]` then `words[..offset]`.
    pub fn from_words(words: &[String], offset: usize, line_number: usize) -> Self {
        debug_assert!(offset < words.len(), "offset {offset} out of range for {} words", words.len());

        let text = words[offset..]
            .iter()
            .chain(words[..offset].iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            text,
            line_number,
            offset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The leading (significant) word of this rotation.
    pub fn keyword(&self) -> &str {
        self.text.split(' ').next().unwrap_or("")
    }
}

/// Every rotation of the document, in final case-aware order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedIndex {
    rotations: Vec<Rotation>,
}

impl OrderedIndex {
    /// Callers are expected to hand over rotations that are already ordered;
    /// `LineOrderer` is the only producer inside this crate.
    pub(crate) fn from_ordered(rotations: Vec<Rotation>) -> Self {
        Self { rotations }
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rotation> {
        self.rotations.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.rotations.iter().map(Rotation::as_str).collect()
    }

    pub fn into_rotations(self) -> Vec<Rotation> {
        self.rotations
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = &'a Rotation;
    type IntoIter = std::slice::Iter<'a, Rotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rotations.iter()
    }
}

/// Describes how an index was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMetadata {
    pub config: IndexConfig,

    pub document_version: SourceVersion,
    pub noise_words_version: SourceVersion,

    pub line_count: usize,
    pub noise_word_count: usize,

    pub rotations_considered: usize,
    pub rotations_emitted: usize,
    pub rotations_excluded_as_noise: usize,

    pub generated_at: DateTime<Utc>, // informational only
}

/// The final result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexReport {
    pub index: IndexMetadata,
    pub rotations: OrderedIndex,
}
