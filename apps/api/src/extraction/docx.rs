//! DOCX body text. A `.docx` file is a zip container; the body lives in
//! `word/document.xml` as WordprocessingML runs (`<w:t>`) grouped into paragraphs (`<w:p>`).

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;

use crate::errors::EngineError;
use crate::extraction::document::{ResumeFormat, TextExtractor};

const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the decompressed body part. Real resumes stay well under 1 MiB.
const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

// Paragraph properties (tab stops), field codes and deleted revisions carry no body text.
static NON_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<w:pPr(?:\s[^>]*[^/>])?>.*?</w:pPr>|<w:instrText(?:\s[^>]*[^/>])?>.*?</w:instrText>|<w:delText(?:\s[^>]*[^/>])?>.*?</w:delText>",
    )
    .expect("valid regex")
});
static PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</w:p>|<w:(?:br|cr)\b[^>]*/>").expect("valid regex"));
static TAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:tab\b[^>]*/>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static CHAR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid regex"));

pub struct DocxTextExtractor;

impl TextExtractor for DocxTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, EngineError> {
        read_document_xml(bytes, MAX_DOCUMENT_XML_BYTES)
            .map(|xml| document_xml_to_text(&xml))
            .map_err(|e| EngineError::extraction_failed(ResumeFormat::Docx, e))
    }
}

/// Reads the body part, refusing to inflate more than `limit` bytes.
fn read_document_xml(bytes: &[u8], limit: u64) -> anyhow::Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("not a valid DOCX zip container")?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("missing {DOCUMENT_PART}"))?;

    // The declared size is attacker-controlled, so the read is capped as well.
    if part.size() > limit {
        bail!("{DOCUMENT_PART} declares {} bytes, limit is {limit}", part.size());
    }
    let mut raw = Vec::new();
    part.take(limit + 1)
        .read_to_end(&mut raw)
        .with_context(|| format!("failed to inflate {DOCUMENT_PART}"))?;
    if raw.len() as u64 > limit {
        bail!("{DOCUMENT_PART} inflates past the {limit} byte limit");
    }

    String::from_utf8(raw).with_context(|| format!("{DOCUMENT_PART} is not valid UTF-8"))
}

/// Flattens WordprocessingML into plain text: one line per paragraph or break,
/// tabs preserved, markup dropped, entities decoded.
fn document_xml_to_text(xml: &str) -> String {
    let text = NON_TEXT.replace_all(xml, "");
    let text = PARAGRAPH_END.replace_all(&text, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

fn decode_entities(text: &str) -> String {
    let numeric = CHAR_REF.replace_all(text, |caps: &regex::Captures| {
        let reference = &caps[1];
        let code = match reference.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => reference.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    // `&amp;` last so "&amp;lt;" decodes to the literal "&lt;".
    numeric
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
