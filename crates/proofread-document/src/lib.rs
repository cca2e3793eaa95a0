//! Proofread Document Extraction
//!
//! Converts a document on disk into a single UTF-8 text string.
//!
//! # Overview
//!
//! Three format families are supported, chosen by a case-insensitive match on
//! the file name suffix:
//!
//! | Suffix           | Format                    |
//! |------------------|---------------------------|
//! | `.docx`, `.doc`  | [`DocumentFormat::Word`]      |
//! | `.pdf`           | [`DocumentFormat::Pdf`]       |
//! | `.txt`           | [`DocumentFormat::PlainText`] |
//!
//! Any other suffix classifies as [`DocumentFormat::Unrecognized`] and is
//! rejected by both [`is_supported`] and [`extract`].
//!
//! Source files are only ever read. Each file is read into memory in one call,
//! so the handle is closed before decoding starts.
//!
//! # Example Usage
//!
//! ```no_run
//! use proofread_document::{extract, is_supported};
//! use std::path::Path;
//!
//! let path = Path::new("essay.docx");
//! if is_supported(path) {
//!     let text = extract(path)?;
//!     println!("{} characters", text.chars().count());
//! }
//! # Ok::<(), proofread_document::DocumentError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod format;
mod pdf;
mod text;
mod word;

pub use error::DocumentError;
pub use format::{classify, is_supported, DocumentFormat, SUPPORTED_EXTENSIONS};

use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Extract the text content of the document at `path`
///
/// # Errors
///
/// - [`DocumentError::UnsupportedFormat`] when the suffix is not one of the
///   supported families; the file is not opened in that case.
/// - [`DocumentError::ExtractionIo`] when reading or decoding fails (missing
///   file, permission error, corrupt or truncated container).
pub fn extract(path: &Path) -> Result<String, DocumentError> {
    let format = classify(path);
    if format == DocumentFormat::Unrecognized {
        return Err(DocumentError::UnsupportedFormat(file_name(path)));
    }

    debug!("Reading {} as {:?}", path.display(), format);

    let bytes = fs::read(path).map_err(|e| DocumentError::ExtractionIo(e.to_string()))?;
    let text = extract_bytes(format, &bytes)?;

    info!(
        "Extracted {} chars from {} ({} bytes)",
        text.chars().count(),
        path.display(),
        bytes.len()
    );

    Ok(text)
}

/// Extract text from an in-memory document of a known format
pub fn extract_bytes(format: DocumentFormat, bytes: &[u8]) -> Result<String, DocumentError> {
    match format {
        DocumentFormat::Word => word::extract_word(bytes),
        DocumentFormat::Pdf => pdf::extract_pdf(bytes),
        DocumentFormat::PlainText => Ok(text::decode_text(bytes)),
        DocumentFormat::Unrecognized => Err(DocumentError::UnsupportedFormat(
            "unrecognized document format".to_string(),
        )),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
