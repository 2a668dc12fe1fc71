use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::{DocumentError, DocumentStore, NoiseWordSet};
use crate::types::identifiers::SourceVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Document,
    NoiseWords,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Document => f.write_str("input file"),
            SourceKind::NoiseWords => f.write_str("noise words file"),
        }
    }
}

/// A source that cannot be opened or read as text. Always fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Error opening {kind} {}: {source}", path.display())]
    Unreadable {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading {kind} {}: {source}", path.display())]
    InvalidContent {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

impl SourceError {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceError::Unreadable { kind, .. } | SourceError::InvalidContent { kind, .. } => *kind,
        }
    }
}

/// Both pipeline inputs, fully read and parsed.
#[derive(Debug, Clone)]
pub struct Sources {
    pub document: DocumentStore,
    pub noise_words: NoiseWordSet,
    pub noise_words_version: SourceVersion,
}

impl Sources {
    pub fn from_text(document: &str, noise_words: &str) -> Self {
        Sources {
            document: DocumentStore::load(document),
            noise_words: NoiseWordSet::build(noise_words),
            noise_words_version: SourceVersion::from_content(noise_words.as_bytes()),
        }
    }

    /// Read the noise word list, then the document.
    ///
    /// Either failure stops the run before anything downstream starts.
    pub fn load(input_path: &Path, noise_words_path: &Path) -> Result<Self, SourceError> {
        let noise_text = read_text(SourceKind::NoiseWords, noise_words_path)?;
        let noise_words = NoiseWordSet::build(&noise_text);
        let noise_words_version = SourceVersion::from_content(noise_text.as_bytes());
        tracing::debug!(
            path = %noise_words_path.display(),
            count = noise_words.len(),
            "loaded noise words"
        );

        let raw = read_bytes(SourceKind::Document, input_path)?;
        let document = DocumentStore::ingest(raw).map_err(|source| SourceError::InvalidContent {
            kind: SourceKind::Document,
            path: input_path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %input_path.display(),
            lines = document.lines().len(),
            words = document.word_count(),
            "loaded document"
        );

        Ok(Sources {
            document,
            noise_words,
            noise_words_version,
        })
    }
}

fn read_bytes(kind: SourceKind, path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|source| SourceError::Unreadable {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(kind: SourceKind, path: &Path) -> Result<String, SourceError> {
    let raw = read_bytes(kind, path)?;
    String::from_utf8(raw).map_err(|e| SourceError::InvalidContent {
        kind,
        path: path.to_path_buf(),
        source: DocumentError::from(e),
    })
}
