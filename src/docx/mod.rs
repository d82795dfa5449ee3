// src/docx/mod.rs
pub mod models;
pub mod reader;

// Re-export key container types for convenience
pub use models::{BodyElement, Document, TableRow};
pub use reader::{parse_document_xml, read_document};
