pub mod config;
pub mod loader;

use chrono::Utc;

use crate::document::{DocumentStore, NoiseWordSet};
use crate::ordering::{CaseAwareOrder, LineOrderer, RotationOrder};
use crate::rotation::{CircularShifter, ShiftGenerator};
use crate::types::kwic_bundle::{IndexMetadata, IndexReport, OrderedIndex};
pub use config::IndexConfig;
pub use loader::{SourceError, SourceKind, Sources};

/// Batch KWIC pipeline: rotate, then order. Each stage completes before the next starts.
pub struct KwicIndexer<G, O> {
    shifter: G,
    orderer: LineOrderer<O>,
    config: IndexConfig,
}

impl Default for KwicIndexer<CircularShifter, CaseAwareOrder> {
    fn default() -> Self {
        Self {
            shifter: CircularShifter,
            orderer: LineOrderer::default(),
            config: IndexConfig::v0(),
        }
    }
}

impl KwicIndexer<CircularShifter, CaseAwareOrder> {
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl<G, O> KwicIndexer<G, O>
where
    G: ShiftGenerator,
    O: RotationOrder,
{
    pub fn new(shifter: G, order: O, config: IndexConfig) -> Self {
        Self {
            shifter,
            orderer: LineOrderer::new(order),
            config,
        }
    }

    /// Rotations of `document` that lead with a significant word, in index order.
    ///
    /// An empty result is valid: every rotation may have been filtered as noise.
    pub fn build_index(&self, document: &DocumentStore, noise_words: &NoiseWordSet) -> OrderedIndex {
        // 1. Shift phase
        let rotations = self.shifter.generate(document, noise_words);
        tracing::debug!(rotations = rotations.len(), "generated circular shifts");

        // 2. Ordering phase
        self.orderer.order(&rotations)
    }

    pub fn index(&self, sources: &Sources) -> IndexReport {
        let ordered = self.build_index(&sources.document, &sources.noise_words);

        let rotations_considered = sources.document.word_count();
        let rotations_emitted = ordered.len();

        let metadata = IndexMetadata {
            config: self.config.clone(),
            document_version: sources.document.version().clone(),
            noise_words_version: sources.noise_words_version.clone(),
            line_count: sources.document.lines().len(),
            noise_word_count: sources.noise_words.len(),
            rotations_considered,
            rotations_emitted,
            rotations_excluded_as_noise: rotations_considered - rotations_emitted,
            generated_at: Utc::now(),
        };

        tracing::info!(
            lines = metadata.line_count,
            emitted = metadata.rotations_emitted,
            excluded = metadata.rotations_excluded_as_noise,
            "index built"
        );

        IndexReport {
            index: metadata,
            rotations: ordered,
        }
    }
}
