// src/extractors/filters.rs

/// Placeholder the blank form template puts in every answer box.
pub const PLACEHOLDER_TEXT: &str = "הזן טקסט כאן...";

/// Lead-in phrases of the template's guidance paragraphs.
pub const INSTRUCTION_STARTERS: &[&str] = &[
    "תאר ופרט",
    "יש להציג",
    "יש לפרט",
    "הנחיה למילוי",
    "ציין האם",
    "שים לב!",
    "ככל שרלוונטי, תאר",
    "ככל שרלוונטי, פרט",
    "הסבר כיצד",
    "יש להתייחס לנושאים",
];

// Footnote legends enumerate numbered items
const LEGEND_MARKERS: (&str, &str) = ("[1]", "[2]");

/// True when trimmed `text` is template guidance rather than an answer.
pub fn is_instruction_text(text: &str) -> bool {
    if INSTRUCTION_STARTERS
        .iter()
        .any(|starter| text.starts_with(starter))
    {
        return true;
    }

    text.contains(LEGEND_MARKERS.0) && text.contains(LEGEND_MARKERS.1)
}

pub fn is_placeholder(text: &str) -> bool {
    text == PLACEHOLDER_TEXT
}

/// Trims `raw` and returns it if it can be a fragment: non-empty, not the
/// placeholder and not instructional. Applied identically to paragraphs and
/// table cells.
pub fn retained_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() || is_placeholder(text) || is_instruction_text(text) {
        tracing::trace!("Discarding template text: '{}'", text);
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_starters() {
        assert!(is_instruction_text("תאר ופרט את הצורך בשוק"));
        assert!(is_instruction_text("שים לב! יש לצרף נספחים"));
        assert!(is_instruction_text("ככל שרלוונטי, פרט את הפטנטים"));
        // Only a leading phrase counts
        assert!(!is_instruction_text("המוצר, כפי שיש להציג אותו"));
        assert!(!is_instruction_text("הצורך: יש ביקוש גבוה"));
    }

    #[test]
    fn test_legend_markers_need_both() {
        assert!(is_instruction_text("מקרא: [1] פטנט רשום [2] בקשה"));
        assert!(!is_instruction_text("ראו הערה [1] בלבד"));
        assert!(!is_instruction_text("ראו הערה [2] בלבד"));
    }

    #[test]
    fn test_retained_text() {
        assert_eq!(retained_text("  המוצר שלנו \n"), Some("המוצר שלנו"));
        assert_eq!(retained_text(" \t\n"), None);
        assert_eq!(retained_text("  הזן טקסט כאן...  "), None);
        assert_eq!(retained_text("יש לפרט את המשימות"), None);
        // Leading whitespace does not hide an instruction
        assert_eq!(retained_text("   יש לפרט את המשימות"), None);
        // Placeholder embedded in other text is kept
        assert_eq!(
            retained_text("הזן טקסט כאן... המוצר"),
            Some("הזן טקסט כאן... המוצר")
        );
    }
}
