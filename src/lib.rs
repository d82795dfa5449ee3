// src/lib.rs
//! Extracts the applicant's answers from a filled-in Tnufa grant application
//! (.docx) and maps them onto the form's eleven fixed sections.

pub mod docx;
pub mod extractors;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

pub use extractors::{FormExtractor, SectionAnswer, SectionResult, SECTIONS};
pub use utils::error::{AppError, ExtractError};

/// Extracts the section answers from in-memory .docx bytes.
pub fn extract_sections(bytes: &[u8]) -> Result<SectionResult, ExtractError> {
    FormExtractor::new().extract(bytes)
}

/// Reads a .docx file and extracts its section answers.
pub async fn extract_file<P: AsRef<Path>>(path: P) -> Result<SectionResult, AppError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(extract_sections(&bytes)?)
}
