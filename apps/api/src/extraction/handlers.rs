//! Axum route handlers for resume ingestion.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_features, extract_text_bounded, ResumeDocument, ResumeFormat};
use crate::models::ExtractedProfile;
use crate::state::AppState;

/// The parts of the multipart form this endpoint reads.
struct ResumeUpload {
    file_name: Option<String>,
    declared_format: Option<String>,
    bytes: Bytes,
}

/// POST /api/v1/resumes/parse
///
/// Multipart form: `file` (required; its file name's extension selects the decoder)
/// and an optional `format` field (`pdf` | `docx`) that overrides the extension.
/// Returns the extracted profile; nothing is stored.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedProfile>, AppError> {
    let upload = read_upload(multipart).await?;

    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded resume is empty".to_string()));
    }
    if upload.bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    let size = upload.bytes.len();
    let document = match (upload.declared_format, upload.file_name) {
        (Some(declared), _) => ResumeDocument::with_declared_format(upload.bytes, &declared)?,
        (None, Some(file_name)) => {
            ResumeDocument::new(upload.bytes, ResumeFormat::from_file_name(&file_name)?)
        }
        (None, None) => {
            return Err(AppError::Validation(
                "Cannot determine resume format: provide a file name or a 'format' field"
                    .to_string(),
            ))
        }
    };
    let format = document.format;
    let text = extract_text_bounded(document, state.config.extraction_timeout).await?;
    let profile = extract_features(&text);

    info!(
        %format,
        bytes = size,
        skills = profile.skills.len(),
        "Parsed resume"
    );
    Ok(Json(profile))
}

async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file: Option<(Option<String>, Bytes)> = None;
    let mut declared_format = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, bytes));
            }
            Some("format") => {
                declared_format = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    Ok(ResumeUpload {
        file_name,
        declared_format,
        bytes,
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
