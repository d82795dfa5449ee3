// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Not a valid document package: {0}")]
    Package(#[from] zip::result::ZipError), // Not a ZIP archive, corrupt entries, etc.

    #[error("Document part not found in package: {0}")]
    MissingPart(String),

    #[error("Document part {0} is not valid UTF-8")]
    Encoding(String),

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document part has no body element")]
    MissingBody,
}

/// A single body element (or part of one) that could not be read.
/// Recovered locally by the reader and never surfaced to callers.
#[derive(Error, Debug)]
pub enum ElementError {
    #[error("Invalid grid span value '{0}' on table cell")]
    InvalidGridSpan(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
