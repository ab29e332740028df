//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::analyze_post;
use crate::analysis::models::{AnalysisResult, ScoreBand};
use crate::analysis::AnalysisError;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub score_band: ScoreBand,
}

/// POST /api/v1/analyze
///
/// Runs one analysis. The configured timeout wraps the whole call; an expired
/// timeout is reported as a transport failure. Unreadable bodies are rejected
/// with the JSON error envelope rather than axum's plain-text rejection.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let timeout = state.config.analysis_timeout;

    let analysis = tokio::time::timeout(
        timeout,
        analyze_post(state.model.as_ref(), &request.content, request.url),
    )
    .await
    .unwrap_or_else(|_| {
        Err(AnalysisError::TransportFailure(format!(
            "model call timed out after {}s",
            timeout.as_secs()
        )))
    })?;

    Ok(Json(AnalyzeResponse {
        score_band: analysis.score_band(),
        analysis,
    }))
}
