//! Format classification by file name suffix

use std::path::Path;

/// Supported file extensions, lowercase, without the leading dot
pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx", "doc", "pdf", "txt"];

/// Document format families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Word-processor container (`.docx`, `.doc`)
    Word,
    /// Page-description document (`.pdf`)
    Pdf,
    /// UTF-8 plain text (`.txt`)
    PlainText,
    /// Any other suffix
    Unrecognized,
}

impl DocumentFormat {
    /// Human-readable name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Word => "word",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::PlainText => "plain-text",
            DocumentFormat::Unrecognized => "unrecognized",
        }
    }
}

/// Classify a path by the case-insensitive suffix of its file name
///
/// This is a pure function: the file is never touched.
///
/// # Examples
///
/// ```
/// use proofread_document::{classify, DocumentFormat};
/// use std::path::Path;
///
/// assert_eq!(classify(Path::new("Report.DOCX")), DocumentFormat::Word);
/// assert_eq!(classify(Path::new("notes.md")), DocumentFormat::Unrecognized);
/// ```
pub fn classify(path: &Path) -> DocumentFormat {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return DocumentFormat::Unrecognized,
    };

    if name.ends_with(".docx") || name.ends_with(".doc") {
        DocumentFormat::Word
    } else if name.ends_with(".pdf") {
        DocumentFormat::Pdf
    } else if name.ends_with(".txt") {
        DocumentFormat::PlainText
    } else {
        DocumentFormat::Unrecognized
    }
}

/// Check whether `extract` would accept this path, without reading it
pub fn is_supported(path: &Path) -> bool {
    classify(path) != DocumentFormat::Unrecognized
}
