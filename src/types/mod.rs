pub mod identifiers;
pub mod kwic_bundle;

pub use identifiers::SourceVersion;
pub use kwic_bundle::{IndexMetadata, IndexReport, OrderedIndex, Rotation};
