// src/extractors/walker.rs
use crate::docx::{BodyElement, Document};
use crate::extractors::filters::retained_text;
use std::slice;

/// Walks a document's body and yields its fragments in body order.
///
/// Cheap to copy; every call to [`ContentWalker::fragments`] starts a new
/// pass from the top of the document.
#[derive(Debug, Clone, Copy)]
pub struct ContentWalker<'a> {
    document: &'a Document,
}

impl<'a> ContentWalker<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn fragments(&self) -> Fragments<'a> {
        Fragments {
            elements: self.document.elements().iter(),
        }
    }
}

/// Lazy fragment sequence produced by [`ContentWalker`].
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    elements: slice::Iter<'a, BodyElement>,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.by_ref().find_map(element_fragment)
    }
}

/// The fragment a single body element contributes, if any.
///
/// A paragraph contributes its trimmed text. A table contributes only its
/// first qualifying cell, scanning rows top to bottom and cells left to right.
pub fn element_fragment(element: &BodyElement) -> Option<&str> {
    match element {
        BodyElement::Paragraph(text) => retained_text(text),
        BodyElement::Table(rows) => rows
            .iter()
            .flatten()
            .find_map(|cell| retained_text(cell)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::filters::PLACEHOLDER_TEXT;

    fn para(text: &str) -> BodyElement {
        BodyElement::Paragraph(text.to_string())
    }

    fn table(rows: &[&[&str]]) -> BodyElement {
        BodyElement::Table(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_paragraphs_trimmed_and_filtered() {
        let document: Document = vec![
            para("  ראשון  "),
            para(""),
            para(PLACEHOLDER_TEXT),
            para("תאר ופרט את המוצר"),
            para("שני"),
        ]
        .into_iter()
        .collect();

        let fragments: Vec<_> = ContentWalker::new(&document).fragments().collect();
        assert_eq!(fragments, vec!["ראשון", "שני"]);
    }

    #[test]
    fn test_table_contributes_first_qualifying_cell_only() {
        let rows: Vec<String> = (1..=10).map(|i| format!("שורה {}", i)).collect();
        let mut grid: Vec<Vec<&str>> = vec![vec!["", PLACEHOLDER_TEXT], vec!["יש לפרט", "  "]];
        grid.extend(rows.iter().map(|row| vec![row.as_str(), "תא נוסף"]));
        let grid_refs: Vec<&[&str]> = grid.iter().map(Vec::as_slice).collect();

        let document = Document::new(vec![table(&grid_refs)]);
        let fragments: Vec<_> = ContentWalker::new(&document).fragments().collect();
        assert_eq!(fragments, vec!["שורה 1"]);
    }

    #[test]
    fn test_table_scan_is_row_major() {
        let document = Document::new(vec![table(&[&["", "ימין עליון"], &["שמאל תחתון", ""]])]);
        assert_eq!(
            ContentWalker::new(&document).fragments().next(),
            Some("ימין עליון")
        );
    }

    #[test]
    fn test_table_without_qualifying_cell_contributes_nothing() {
        let document = Document::new(vec![
            table(&[&[PLACEHOLDER_TEXT, ""], &["שים לב! הנחיה"]]),
            table(&[]),
            para("אחרי"),
        ]);
        let fragments: Vec<_> = ContentWalker::new(&document).fragments().collect();
        assert_eq!(fragments, vec!["אחרי"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let document = Document::new(vec![para("א"), table(&[&["ב"]]), para("ג")]);
        let walker = ContentWalker::new(&document);

        let mut first = walker.fragments();
        assert_eq!(first.next(), Some("א"));

        let second: Vec<_> = walker.fragments().collect();
        assert_eq!(second, vec!["א", "ב", "ג"]);
        assert_eq!(first.collect::<Vec<_>>(), vec!["ב", "ג"]);
    }

    #[test]
    fn test_empty_document() {
        let document = Document::default();
        assert_eq!(ContentWalker::new(&document).fragments().count(), 0);
    }
}
