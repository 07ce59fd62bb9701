// Resume ingestion: document bytes -> flat text -> ExtractedProfile.
// Decoding is CPU-bound and may stall on hostile PDFs; async callers go through
// `extract_text_bounded`, which runs on the blocking pool under a timeout.

pub mod document;
pub mod docx;
pub mod features;
pub mod handlers;
pub mod pdf;
pub mod sections;
pub mod tokenizer;
pub mod vocabulary;

pub use document::{extract_text_bounded, ResumeDocument, ResumeFormat};
pub use features::extract_features;
