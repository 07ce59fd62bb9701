use std::panic::{self, AssertUnwindSafe};

use crate::errors::EngineError;
use crate::extraction::document::{ResumeFormat, TextExtractor};

/// Decodes a PDF text layer with `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        // pdf-extract panics on some malformed streams instead of returning an error.
        let decoded = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }))
        .map_err(|payload| {
            EngineError::extraction_failed(
                ResumeFormat::Pdf,
                anyhow::anyhow!("PDF decoder panicked: {}", panic_message(payload.as_ref())),
            )
        })?;

        decoded.map_err(|e| {
            EngineError::extraction_failed(ResumeFormat::Pdf, anyhow::anyhow!("{e}"))
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
