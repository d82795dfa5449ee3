// src/docx/models.rs

/// One row of a table: the plain text of each cell, left to right.
pub type TableRow = Vec<String>;

/// A top-level child of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    /// Plain text of a paragraph (runs concatenated).
    Paragraph(String),
    /// Rows top to bottom, each holding its cells' plain text.
    Table(Vec<TableRow>),
}

/// Body elements in visual top-to-bottom order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<BodyElement>,
}

impl Document {
    pub fn new(elements: Vec<BodyElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[BodyElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<BodyElement> for Document {
    fn from_iter<I: IntoIterator<Item = BodyElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
