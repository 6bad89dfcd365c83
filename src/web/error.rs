use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use super::pages;
use crate::ingest::ExtractionError;

/// Request failures shown to the visitor
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Username and role required.")]
    MissingCredentials,

    #[error("Invalid role")]
    InvalidRole,

    #[error("Invalid file")]
    InvalidFile,

    #[error("Invalid number of questions")]
    InvalidQuestionCount,

    #[error("Invalid timer value")]
    InvalidTimer,

    #[error("Failed to extract text from file.")]
    Extraction(#[from] ExtractionError),

    #[error("Invalid session key")]
    InvalidSession,

    #[error("{}", upload_message(.0))]
    Multipart(#[from] MultipartError),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredentials
            | AppError::InvalidRole
            | AppError::InvalidFile
            | AppError::InvalidQuestionCount
            | AppError::InvalidTimer => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidSession => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn upload_message(e: &MultipartError) -> String {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        "Upload too large".to_string()
    } else {
        format!("Malformed upload: {}", e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Extraction(e) => tracing::warn!("extraction failed: {}", e),
            AppError::Internal(e) => tracing::error!("internal error: {}", e),
            other => tracing::debug!("request rejected: {}", other),
        }

        let status = self.status();
        (status, Html(pages::error(status, &self.to_string()))).into_response()
    }
}
