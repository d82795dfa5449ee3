// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

// --- Data Structures ---

/// One question of the application form and the keywords that route
/// applicant text to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDefinition {
    pub id: &'static str,
    pub question: &'static str,
    pub keywords: &'static [&'static str],
}

impl SectionDefinition {
    /// Plain, case-sensitive substring containment of any keyword.
    pub fn matches(&self, fragment: &str) -> bool {
        self.keywords.iter().any(|keyword| fragment.contains(keyword))
    }
}

// --- Section Table ---
// Declaration order decides ties: a fragment goes to the first section
// whose keywords match it.
pub static SECTIONS: [SectionDefinition; 11] = [
    SectionDefinition {
        id: "executive_summary",
        question: "סיכום מנהלים",
        keywords: &["סיכום מנהלים"],
    },
    SectionDefinition {
        id: "the_need",
        question: "הצורך",
        keywords: &["הצורך"],
    },
    SectionDefinition {
        id: "the_product",
        question: "המוצר",
        keywords: &["המוצר"],
    },
    SectionDefinition {
        id: "team_and_capabilities",
        question: "הצוות ויכולות המיזם, פערים ביכולות",
        keywords: &["הצוות", "פערים", "עובדי מוסד", "מסגרת תומכת"],
    },
    SectionDefinition {
        id: "intellectual_property",
        question: "קניין רוחני",
        keywords: &["קניין רוחני", "בעלות במוצרי", "קוד פתוח", "פטנט"],
    },
    SectionDefinition {
        id: "technology_uniqueness_innovation",
        question: "הטכנולוגיה, ייחודיות וחדשנות, חסמי כניסה טכנולוגיים, אתגרים, מוצרי צד ג'",
        keywords: &["טכנולוגיה", "ייחודיות", "חדשנות", "אתגרים"],
    },
    SectionDefinition {
        id: "tasks_and_activities",
        question: "משימות ופעילויות במיזם זה",
        keywords: &["משימות"],
    },
    SectionDefinition {
        id: "market_clients_competition_business_model",
        question: "שוק, לקוחות, תחרות ומודל עסקי",
        keywords: &[
            "שוק",
            "לקוחות",
            "תיקוף שוק",
            "מודל עסקי",
            "תחרות",
            "מתחרים",
            "חסמי כניסה",
        ],
    },
    SectionDefinition {
        id: "grant_contribution_to_success",
        question: "תרומת מענק תנופה להצלחת המיזם",
        keywords: &["תרומת מענק", "מענק תנופה"],
    },
    SectionDefinition {
        id: "royalties",
        question: "תמלוגים",
        keywords: &["תמלוגים"],
    },
    SectionDefinition {
        id: "economic_and_technological_contribution",
        question: "התרומה הטכנולוגית והתעסוקתית הצפויה של המיזם לכלכלה הישראלית",
        keywords: &["תרומה הטכנולוגית", "תרומה התעסוקתית", "תרומה"],
    },
];

static SECTION_INDEX: Lazy<HashMap<&'static str, &'static SectionDefinition>> =
    Lazy::new(|| SECTIONS.iter().map(|section| (section.id, section)).collect());

/// Looks up a section of the built-in table by its identifier.
pub fn section_by_id(id: &str) -> Option<&'static SectionDefinition> {
    SECTION_INDEX.get(id).copied()
}

/// The question of one section and the applicant's answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAnswer {
    #[serde(skip)]
    pub id: &'static str,
    pub question: &'static str,
    pub answer: String,
}

/// Every section of a table, in declaration order, with its answer.
///
/// Serializes as a JSON object keyed by section identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    answers: Vec<SectionAnswer>,
}

impl SectionResult {
    /// All sections present, all answers empty.
    pub fn empty(sections: &'static [SectionDefinition]) -> Self {
        Self::from_answers(sections, std::iter::repeat_with(String::new))
    }

    /// Pairs each section with the next answer; missing answers are empty.
    pub(crate) fn from_answers<I>(sections: &'static [SectionDefinition], answers: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut answers = answers.into_iter();
        Self {
            answers: sections
                .iter()
                .map(|section| SectionAnswer {
                    id: section.id,
                    question: section.question,
                    answer: answers.next().unwrap_or_default(),
                })
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&SectionAnswer> {
        self.answers.iter().find(|answer| answer.id == id)
    }

    /// The answer text for `id`, or `None` for an unknown identifier.
    pub fn answer(&self, id: &str) -> Option<&str> {
        self.get(id).map(|answer| answer.answer.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionAnswer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of sections with a non-empty answer.
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|answer| !answer.answer.is_empty()).count()
    }
}

impl<'a> IntoIterator for &'a SectionResult {
    type Item = &'a SectionAnswer;
    type IntoIter = std::slice::Iter<'a, SectionAnswer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for SectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.answers.len()))?;
        for answer in &self.answers {
            map.serialize_entry(answer.id, answer)?;
        }
        map.end()
    }
}
