//! PDF text extraction

use crate::error::DocumentError;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Extract text from a PDF, page by page in page order
///
/// Uses `pdf-extract` defaults for page breaks. Columns are not reconstructed,
/// so multi-column layouts may interleave differently from reading order.
/// The decoder can panic on malformed input; that is reported as an
/// extraction failure like any other decode error.
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<String, DocumentError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match result {
        Ok(Ok(text)) => {
            debug!("PDF document: {} form feeds", text.matches('\x0C').count());
            Ok(text)
        }
        Ok(Err(e)) => Err(DocumentError::ExtractionIo(e.to_string())),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("PDF decoder panicked: {}", message);
            Err(DocumentError::ExtractionIo(format!("PDF decode failed: {}", message)))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
