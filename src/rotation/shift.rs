use crate::document::{DocumentStore, Line, NoiseWordSet};
use crate::types::kwic_bundle::Rotation;

pub trait ShiftGenerator {
    /// Rotations of a single line. `line_number` is 1-based.
    fn shift_line(&self, line: &Line, line_number: usize, noise_words: &NoiseWordSet) -> Vec<Rotation>;

    /// Rotations of every line, lines in document order.
    fn generate(&self, document: &DocumentStore, noise_words: &NoiseWordSet) -> Vec<Rotation> {
        document
            .lines()
            .iter()
            .enumerate()
            .flat_map(|(i, line)| self.shift_line(line, i + 1, noise_words))
            .collect()
    }
}

/// v0: classic KWIC circular shift.
///
/// Offsets 0..n are visited in increasing order; the rotation at offset `i`
/// starts with `line[i]` and is kept only if that word is not a noise word.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircularShifter;

impl ShiftGenerator for CircularShifter {
    fn shift_line(&self, line: &Line, line_number: usize, noise_words: &NoiseWordSet) -> Vec<Rotation> {
        let words = line.words();

        words
            .iter()
            .enumerate()
            .filter(|(_, lead)| !noise_words.contains(lead.as_str()))
            .map(|(offset, _)| Rotation::from_words(words, offset, line_number))
            .collect()
    }
}
