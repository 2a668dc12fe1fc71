pub mod compare;

use crate::types::kwic_bundle::{OrderedIndex, Rotation};

pub use compare::case_aware_cmp;

pub trait RotationOrder {
    fn compare(&self, a: &str, b: &str) -> std::cmp::Ordering;
}

/// v0: letters compared case-insensitively, lowercase before uppercase on
/// otherwise equal letters, shorter before longer on equal prefixes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseAwareOrder;

impl RotationOrder for CaseAwareOrder {
    fn compare(&self, a: &str, b: &str) -> std::cmp::Ordering {
        case_aware_cmp(a, b)
    }
}

/// Sorts rotations into the final index without touching the input.
pub struct LineOrderer<O> {
    order: O,
}

impl Default for LineOrderer<CaseAwareOrder> {
    fn default() -> Self {
        Self {
            order: CaseAwareOrder,
        }
    }
}

impl<O> LineOrderer<O>
where
    O: RotationOrder,
{
    pub fn new(order: O) -> Self {
        Self { order }
    }

    pub fn order(&self, rotations: &[Rotation]) -> OrderedIndex {
        let mut ordered = rotations.to_vec();

        // Stable: identical texts keep their generation order.
        ordered.sort_by(|a, b| self.order.compare(&a.text, &b.text));

        debug_assert!(ordered
            .windows(2)
            .all(|w| self.order.compare(&w[0].text, &w[1].text).is_le()));

        OrderedIndex::from_ordered(ordered)
    }
}
