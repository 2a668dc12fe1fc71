//! Key-Word-In-Context (KWIC) index builder.
//!
//! `kwic-core` tokenizes a document, generates every circular shift of each
//! line that begins with a significant (non-noise) word, and orders the shifts
//! alphabetically: case-insensitive between different letters, lowercase
//! before uppercase when letters are otherwise identical. Every stage is
//! deterministic and consumes an immutable view of its predecessor's output.

pub mod document;
pub mod ordering;
pub mod pipeline;
pub mod render;
pub mod rotation;
pub mod types;
