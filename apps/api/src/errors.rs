use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats::extract::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file provided")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("No job description provided")]
    MissingJobDescription,

    #[error("{0}")]
    MalformedForm(String),

    /// Extraction or scoring failed. The message reaches the client verbatim.
    #[error("{0}")]
    Processing(String),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Processing(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFile
            | AppError::EmptyFilename
            | AppError::MissingJobDescription
            | AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::Processing(msg) => {
                tracing::error!("Error processing request: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
