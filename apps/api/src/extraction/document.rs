//! Text Extractor: turns a resume document (PDF or DOCX) into a flat text blob.
//!
//! Format dispatch goes through the `TextExtractor` trait so each decoder lives in its
//! own module (`pdf`, `docx`). Nothing here touches the filesystem: callers source the
//! bytes and own the document.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::extraction::docx::DocxTextExtractor;
use crate::extraction::pdf::PdfTextExtractor;

/// The two resume formats the engine can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Resolves the format from a file name's extension (`resume.PDF` -> `Pdf`).
    pub fn from_file_name(file_name: &str) -> Result<Self, EngineError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| EngineError::UnsupportedFormat(file_name.to_string()))?;
        extension.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Docx => "docx",
        }
    }
}

impl FromStr for ResumeFormat {
    type Err = EngineError;

    fn from_str(declared: &str) -> Result<Self, Self::Err> {
        let normalized = declared.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "docx" => Ok(ResumeFormat::Docx),
            _ => Err(EngineError::UnsupportedFormat(declared.to_string())),
        }
    }
}

impl fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw resume content plus its declared format. Lives for one extraction call.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub bytes: Bytes,
    pub format: ResumeFormat,
}

impl ResumeDocument {
    pub fn new(bytes: impl Into<Bytes>, format: ResumeFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    /// Builds a document from a caller-declared format string, rejecting anything
    /// other than `pdf` / `docx`.
    pub fn with_declared_format(
        bytes: impl Into<Bytes>,
        declared_format: &str,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(bytes, declared_format.parse()?))
    }
}

/// A decoder for one resume format.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, EngineError>;
}

fn extractor_for(format: ResumeFormat) -> &'static dyn TextExtractor {
    match format {
        ResumeFormat::Pdf => &PdfTextExtractor,
        ResumeFormat::Docx => &DocxTextExtractor,
    }
}

/// Decodes the document body into text.
pub fn extract_text(document: &ResumeDocument) -> Result<String, EngineError> {
    let text = extractor_for(document.format).extract(&document.bytes)?;
    debug!(
        format = %document.format,
        input_bytes = document.bytes.len(),
        text_chars = text.chars().count(),
        "Extracted resume text"
    );
    Ok(text)
}

/// Runs `extract_text` on the blocking pool and gives up after `limit`.
///
/// A timeout, or a decoder thread that dies, is reported as `ExtractionFailed`.
/// The abandoned decode keeps running on its blocking thread until it finishes.
pub async fn extract_text_bounded(
    document: ResumeDocument,
    limit: Duration,
) -> Result<String, EngineError> {
    let format = document.format;
    run_bounded(format, limit, move || extract_text(&document)).await
}

async fn run_bounded<F>(
    format: ResumeFormat,
    limit: Duration,
    decode: F,
) -> Result<String, EngineError>
where
    F: FnOnce() -> Result<String, EngineError> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(decode);

    match tokio::time::timeout(limit, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(EngineError::extraction_failed(
            format,
            anyhow::anyhow!("decoder task failed: {join_err}"),
        )),
        Err(_) => Err(EngineError::extraction_failed(
            format,
            anyhow::anyhow!("decoding exceeded {}s", limit.as_secs_f64()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::docx::tests::build_docx;

    #[test]
    fn test_declared_format_parsing() {
        assert_eq!("pdf".parse::<ResumeFormat>().unwrap(), ResumeFormat::Pdf);
        assert_eq!("DOCX".parse::<ResumeFormat>().unwrap(), ResumeFormat::Docx);
        assert_eq!(".pdf".parse::<ResumeFormat>().unwrap(), ResumeFormat::Pdf);
    }

    #[test]
    fn test_unsupported_declared_format() {
        let err = "txt".parse::<ResumeFormat>().unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat(ref f) if f == "txt"));
        assert!("doc".parse::<ResumeFormat>().is_err());
    }

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            ResumeFormat::from_file_name("jane_doe.PDF").unwrap(),
            ResumeFormat::Pdf
        );
        assert_eq!(
            ResumeFormat::from_file_name("cv.final.docx").unwrap(),
            ResumeFormat::Docx
        );
        assert!(matches!(
            ResumeFormat::from_file_name("resume.txt"),
            Err(EngineError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ResumeFormat::from_file_name("resume"),
            Err(EngineError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_declared_txt_rejected_before_decoding() {
        let bytes = b"Education\nBS Computer Science".to_vec();
        let err = ResumeDocument::with_declared_format(bytes, "txt").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extract_corrupt_pdf_fails() {
        let bytes = b"definitely not a pdf".to_vec();
        let document = ResumeDocument::with_declared_format(bytes, "pdf").unwrap();
        let err = extract_text(&document).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ExtractionFailed {
                format: ResumeFormat::Pdf,
                ..
            }
        ));
    }

    #[test]
    fn test_extract_docx_dispatch() {
        let document = ResumeDocument::with_declared_format(
            build_docx(&["Education", "BS Computer Science, MIT"]),
            "docx",
        )
        .unwrap();
        let text = extract_text(&document).unwrap();
        assert!(text.contains("BS Computer Science, MIT"));
    }

    #[tokio::test]
    async fn test_bounded_extraction_returns_text() {
        let document = ResumeDocument::new(build_docx(&["Skills: Python"]), ResumeFormat::Docx);
        let text = extract_text_bounded(document, Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(text.trim(), "Skills: Python");
    }

    #[tokio::test]
    async fn test_bounded_extraction_propagates_failure() {
        let document = ResumeDocument::new(b"garbage".to_vec(), ResumeFormat::Docx);
        let err = extract_text_bounded(document, Duration::from_secs(10))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ExtractionFailed { .. }));
    }

    #[tokio::test]
    async fn test_slow_decode_times_out() {
        let err = run_bounded(ResumeFormat::Pdf, Duration::from_millis(10), || {
            std::thread::sleep(Duration::from_millis(250));
            Ok("too late".to_string())
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            EngineError::ExtractionFailed {
                format: ResumeFormat::Pdf,
                ..
            }
        ));
        assert!(err.to_string().contains("decoding exceeded"));
    }

    #[tokio::test]
    async fn test_panicking_decode_is_extraction_failure() {
        let err = run_bounded(ResumeFormat::Docx, Duration::from_secs(5), || {
            panic!("decoder blew up")
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("decoder task failed"));
    }
}
