// src/extractors/classifier.rs
use crate::extractors::section::{SectionDefinition, SectionResult, SECTIONS};
use std::collections::HashSet;

/// Answer separator between fragments of one section.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Routes fragments to sections by ordered keyword matching.
#[derive(Debug, Clone, Copy)]
pub struct SectionClassifier {
    sections: &'static [SectionDefinition],
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new(&SECTIONS)
    }
}

impl SectionClassifier {
    pub fn new(sections: &'static [SectionDefinition]) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &'static [SectionDefinition] {
        self.sections
    }

    /// Position of the first section, in declaration order, whose keywords
    /// match `fragment`.
    pub fn section_index(&self, fragment: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.matches(fragment))
    }

    pub fn classify(&self, fragment: &str) -> Option<&'static SectionDefinition> {
        self.section_index(fragment).map(|index| &self.sections[index])
    }

    pub fn aggregator<'a>(&self) -> SectionAggregator<'a> {
        SectionAggregator::new(self.sections)
    }

    /// Classifies every fragment and builds the per-section answers.
    /// Fragments matching no section are dropped.
    pub fn aggregate<'a, I>(&self, fragments: I) -> SectionResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut aggregator = self.aggregator();
        for fragment in fragments {
            match self.section_index(fragment) {
                Some(index) => {
                    aggregator.push(index, fragment);
                }
                None => tracing::trace!("No section matched fragment: '{}'", fragment),
            }
        }
        aggregator.finish()
    }
}

/// Per-section accumulator. Keeps the first occurrence of each exact
/// fragment, in arrival order.
#[derive(Debug)]
pub struct SectionAggregator<'a> {
    sections: &'static [SectionDefinition],
    parts: Vec<Vec<&'a str>>,
    seen: Vec<HashSet<&'a str>>,
}

impl<'a> SectionAggregator<'a> {
    fn new(sections: &'static [SectionDefinition]) -> Self {
        Self {
            sections,
            parts: vec![Vec::new(); sections.len()],
            seen: vec![HashSet::new(); sections.len()],
        }
    }

    /// Records `fragment` under the section at `index`. Returns false when it
    /// was an exact duplicate and was not recorded.
    pub fn push(&mut self, index: usize, fragment: &'a str) -> bool {
        if !self.seen[index].insert(fragment) {
            tracing::trace!(
                "Dropping duplicate fragment for {}: '{}'",
                self.sections[index].id,
                fragment
            );
            return false;
        }
        self.parts[index].push(fragment);
        true
    }

    pub fn finish(self) -> SectionResult {
        SectionResult::from_answers(
            self.sections,
            self.parts.iter().map(|parts| parts.join(FRAGMENT_SEPARATOR)),
        )
    }
}
