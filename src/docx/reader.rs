// src/docx/reader.rs

// --- Imports ---
use crate::docx::models::{BodyElement, Document, TableRow};
use crate::utils::error::{DocumentError, ElementError};
use roxmltree::Node;
use std::io::{Cursor, Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

// --- Constants ---
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";
// Transitional and strict relationship URIs share this suffix
const OFFICE_DOCUMENT_REL_SUFFIX: &str = "/officeDocument";
// Word caps a table grid at 63 columns
const MAX_GRID_SPAN: usize = 63;

/// Opens a .docx package from memory and reads its body into a `Document`.
///
/// Any failure here is a malformed-input failure: the bytes are not a ZIP
/// package, the main part is missing or not UTF-8, or its XML is invalid.
pub fn read_document(bytes: &[u8]) -> Result<Document, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    tracing::debug!("Opened document package with {} entries", archive.len());

    let part_name = locate_main_part(&mut archive)?;
    tracing::debug!("Main document part: {}", part_name);

    let xml = read_part(&mut archive, &part_name)?;
    parse_document_xml(&xml)
}

/// Parses a WordprocessingML main document part.
pub fn parse_document_xml(xml: &str) -> Result<Document, DocumentError> {
    let tree = roxmltree::Document::parse(strip_bom(xml))?;

    let body = tree
        .root_element()
        .children()
        .find(|node| is_w(*node, "body"))
        .ok_or(DocumentError::MissingBody)?;

    let mut elements = Vec::new();
    for node in body.children().filter(Node::is_element) {
        if is_w(node, "p") {
            elements.push(BodyElement::Paragraph(paragraph_text(node)));
        } else if is_w(node, "tbl") {
            elements.push(BodyElement::Table(read_table(node)));
        } else {
            tracing::trace!("Skipping body element <{}>", node.tag_name().name());
        }
    }

    tracing::debug!("Read {} body elements", elements.len());
    Ok(Document::new(elements))
}

/// Finds the main part through the package relationships, falling back to
/// the conventional location when the package carries none.
fn locate_main_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, DocumentError> {
    let rels = match read_part(archive, PACKAGE_RELS_PART) {
        Ok(xml) => xml,
        Err(DocumentError::MissingPart(_)) => {
            tracing::debug!(
                "Package has no {}, assuming {}",
                PACKAGE_RELS_PART,
                DEFAULT_DOCUMENT_PART
            );
            return Ok(DEFAULT_DOCUMENT_PART.to_string());
        }
        Err(e) => return Err(e),
    };

    let tree = roxmltree::Document::parse(strip_bom(&rels))?;
    let target = tree
        .descendants()
        .filter(|node| node.has_tag_name("Relationship"))
        .find(|node| {
            node.attribute("Type")
                .is_some_and(|kind| kind.ends_with(OFFICE_DOCUMENT_REL_SUFFIX))
        })
        .and_then(|node| node.attribute("Target"))
        .ok_or_else(|| DocumentError::MissingPart("officeDocument relationship".to_string()))?;

    // Package-absolute targets start with '/', ZIP entry names never do
    Ok(target.trim_start_matches('/').to_string())
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String, DocumentError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(DocumentError::MissingPart(name.to_string())),
        Err(e) => return Err(e.into()),
    };

    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(ZipError::Io)?;
    String::from_utf8(buf).map_err(|_| DocumentError::Encoding(name.to_string()))
}

fn strip_bom(xml: &str) -> &str {
    xml.trim_start_matches('\u{feff}')
}

fn is_w(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(W_NS)
}

// --- Text ---

/// Concatenated text of the paragraph's runs, including hyperlinked runs.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for child in paragraph.children() {
        if is_w(child, "r") {
            push_run_text(child, &mut text);
        } else if is_w(child, "hyperlink") {
            for run in child.children().filter(|node| is_w(*node, "r")) {
                push_run_text(run, &mut text);
            }
        }
    }
    text
}

fn push_run_text(run: Node<'_, '_>, out: &mut String) {
    for item in run.children().filter(Node::is_element) {
        if item.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match item.tag_name().name() {
            "t" => out.push_str(item.text().unwrap_or_default()),
            "tab" | "ptab" => out.push('\t'),
            "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            // Page and column breaks carry no text
            "br" => match item.attribute((W_NS, "type")) {
                None | Some("textWrapping") => out.push('\n'),
                Some(_) => {}
            },
            _ => {}
        }
    }
}

// --- Tables ---

fn read_table(table: Node<'_, '_>) -> Vec<TableRow> {
    table
        .children()
        .filter(|node| is_w(*node, "tr"))
        .map(read_row)
        .collect()
}

/// Cells of one row; a merged cell repeats once per grid column it spans.
/// Cells that cannot be read are dropped from the row.
fn read_row(row: Node<'_, '_>) -> TableRow {
    let mut cells = Vec::new();
    for cell in row.children().filter(|node| is_w(*node, "tc")) {
        match grid_span(cell) {
            Ok(span) => {
                let text = cell_text(cell);
                cells.extend(std::iter::repeat(text).take(span));
            }
            Err(e) => tracing::warn!("Skipping unreadable table cell: {}", e),
        }
    }
    cells
}

fn grid_span(cell: Node<'_, '_>) -> Result<usize, ElementError> {
    let value = cell
        .children()
        .find(|node| is_w(*node, "tcPr"))
        .and_then(|props| props.children().find(|node| is_w(*node, "gridSpan")))
        .and_then(|span| span.attribute((W_NS, "val")));

    match value {
        None => Ok(1),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|span| (1..=MAX_GRID_SPAN).contains(span))
            .ok_or_else(|| ElementError::InvalidGridSpan(raw.to_string())),
    }
}

/// Text of the cell's own paragraphs joined by newlines; nested tables are
/// not part of it.
fn cell_text(cell: Node<'_, '_>) -> String {
    cell.children()
        .filter(|node| is_w(*node, "p"))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}
