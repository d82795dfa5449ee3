// src/extractors/form.rs

// --- Imports ---
use crate::docx::{read_document, Document};
use crate::extractors::classifier::SectionClassifier;
use crate::extractors::section::SectionResult;
use crate::extractors::walker::ContentWalker;
use crate::utils::error::ExtractError;
use serde::Serialize;

// --- Data Structures ---

/// Counters gathered during one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub elements: usize,  // Body elements in the document
    pub fragments: usize, // Fragments left after filtering
    pub classified: usize,
    pub dropped: usize, // Fragments no section matched
}

/// Where one fragment was routed; `section` is `None` when it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedFragment {
    pub text: String,
    pub section: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub result: SectionResult,
    pub stats: ExtractionStats,
    pub trace: Vec<RoutedFragment>,
}

// --- Main Extractor Structure ---
#[derive(Debug, Clone, Copy, Default)]
pub struct FormExtractor {
    classifier: SectionClassifier,
}

impl FormExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: SectionClassifier) -> Self {
        Self { classifier }
    }

    /// Extracts the section answers from raw .docx bytes.
    pub fn extract(&self, bytes: &[u8]) -> Result<SectionResult, ExtractError> {
        Ok(self.extract_with_report(bytes)?.result)
    }

    /// Same as [`FormExtractor::extract`], also returning counters and the
    /// routing decision of every fragment.
    pub fn extract_with_report(&self, bytes: &[u8]) -> Result<ExtractionReport, ExtractError> {
        tracing::info!("Attempting form extraction from {} bytes", bytes.len());

        // 1. Parse the document container; the only fatal step
        let document = read_document(bytes).map_err(|e| {
            tracing::error!("Document could not be parsed: {}", e);
            ExtractError::from(e)
        })?;

        // 2. Walk, classify and aggregate
        let report = self.extract_document(&document);

        tracing::info!(
            "Extracted {} fragments ({} classified, {} dropped) into {} answered sections",
            report.stats.fragments,
            report.stats.classified,
            report.stats.dropped,
            report.result.answered()
        );
        Ok(report)
    }

    /// Runs the walk and classification over an already parsed document.
    pub fn extract_document(&self, document: &Document) -> ExtractionReport {
        let mut stats = ExtractionStats {
            elements: document.len(),
            ..ExtractionStats::default()
        };
        let mut trace = Vec::new();
        let mut aggregator = self.classifier.aggregator();

        for fragment in ContentWalker::new(document).fragments() {
            stats.fragments += 1;
            let section = match self.classifier.section_index(fragment) {
                Some(index) => {
                    stats.classified += 1;
                    aggregator.push(index, fragment);
                    let id = self.classifier.sections()[index].id;
                    tracing::trace!("Fragment routed to {}: '{}'", id, fragment);
                    Some(id)
                }
                None => {
                    stats.dropped += 1;
                    tracing::trace!("Fragment matched no section: '{}'", fragment);
                    None
                }
            };
            trace.push(RoutedFragment {
                text: fragment.to_string(),
                section,
            });
        }

        if stats.dropped > 0 {
            tracing::warn!("{} fragments matched no section and were dropped", stats.dropped);
        }
        tracing::debug!("Extraction stats: {:?}", stats);

        ExtractionReport {
            result: aggregator.finish(),
            stats,
            trace,
        }
    }
}
