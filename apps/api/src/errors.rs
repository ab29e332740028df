use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// Shown to end users for every model-side failure; the specific kind is logged.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze post. Please check your API key and try again.";

pub const EMPTY_INPUT_MESSAGE: &str = "Please provide the post content for deep analysis.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(AnalysisError::EmptyInput) => (
                StatusCode::BAD_REQUEST,
                AnalysisError::EmptyInput.kind(),
                EMPTY_INPUT_MESSAGE.to_string(),
            ),
            AppError::Analysis(e) => {
                tracing::error!(kind = e.kind(), "Analysis error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    e.kind(),
                    ANALYSIS_FAILED_MESSAGE.to_string(),
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
