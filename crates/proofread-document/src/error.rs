//! Error types for document extraction

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// File name suffix matches none of the supported formats
    #[error("Unsupported file format: {0}. Supported: .docx, .doc, .pdf, .txt")]
    UnsupportedFormat(String),

    /// Read or decode failure on a supported format
    #[error("{0}")]
    ExtractionIo(String),
}
