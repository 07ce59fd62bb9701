use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ResumeFormat;

/// Errors raised by the extraction and matching engine.
///
/// The engine never retries and never reports to a user-visible channel;
/// callers decide how to surface these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported resume format '{0}'. Only PDF and DOCX are supported.")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} resume: {source}")]
    ExtractionFailed {
        format: ResumeFormat,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid {component} sub-score: {value}")]
    InvalidScoreInput { component: &'static str, value: f64 },
}

impl EngineError {
    pub fn extraction_failed(format: ResumeFormat, source: impl Into<anyhow::Error>) -> Self {
        EngineError::ExtractionFailed {
            format,
            source: source.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedFormat(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err.to_string()),
            EngineError::ExtractionFailed { .. } => {
                tracing::warn!("Resume extraction failed: {err:#}");
                AppError::UnprocessableEntity("Could not parse resume".to_string())
            }
            EngineError::InvalidScoreInput { .. } => AppError::Internal(err.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
