use thiserror::Error;

use crate::types::identifiers::SourceVersion;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Split on runs of ASCII whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Other Unicode spaces (e.g. U+00A0) stay inside the word.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_ascii_whitespace() || c == '\x0b')
        .filter(|w| !w.is_empty())
}

/// One input line: its original text and its whitespace-split words.
///
/// Words are kept verbatim. No punctuation stripping, case folding or stemming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    words: Vec<String>,
}

impl Line {
    pub fn parse(raw: &str) -> Self {
        let words = split_words(raw).map(str::to_string).collect();

        Line {
            raw: raw.to_string(),
            words,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The tokenized input document. Populated once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    version: SourceVersion,
    lines: Vec<Line>,
}

impl DocumentStore {
    /// Tokenize text line by line.
    ///
    /// A final line without a trailing newline is still a line; a blank line
    /// becomes a `Line` with zero words.
    pub fn load(text: &str) -> Self {
        let lines = text.lines().map(Line::parse).collect();

        DocumentStore {
            version: SourceVersion::from_content(text.as_bytes()),
            lines,
        }
    }

    /// Ingest raw bytes, rejecting content that is not UTF-8.
    pub fn ingest(raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;
        Ok(Self::load(&content))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn version(&self) -> &SourceVersion {
        &self.version
    }

    /// Total words across all lines; the number of candidate rotations.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }
}
