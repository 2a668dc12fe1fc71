pub mod document;
pub mod noise;

pub use crate::types::identifiers::SourceVersion;
pub use document::{split_words, DocumentError, DocumentStore, Line};
pub use noise::NoiseWordSet;
