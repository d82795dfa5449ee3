// src/extractors/mod.rs
pub mod classifier;
pub mod filters;
pub mod form;
pub mod section;
pub mod walker;

// Re-export key extraction types for convenience
pub use classifier::{SectionAggregator, SectionClassifier};
pub use form::{ExtractionReport, ExtractionStats, FormExtractor, RoutedFragment};
pub use section::{section_by_id, SectionAnswer, SectionDefinition, SectionResult, SECTIONS};
pub use walker::{ContentWalker, Fragments};
