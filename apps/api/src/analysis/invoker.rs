//! Analysis Invoker — one model call, then mandatory schema validation.
//!
//! The model service is only a capability: `invoke(request) -> raw output`.
//! Nothing it returns reaches a caller without passing `validation::validate`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisResult, PostInput};
use crate::analysis::request_builder::{build_request, AnalysisRequest};
use crate::analysis::validation::{parse_text, validate};
use crate::llm_client::{LlmClient, LlmError};

/// Raw, unvalidated answer of a model service.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// Already-decoded structured data (tool call arguments).
    Structured(Value),
    /// Plain text that is expected to contain JSON.
    Text(String),
}

/// External generative-model capability. Implementations perform exactly one
/// outbound call per `invoke` and keep no state between calls.
///
/// Carried in `AppState` as `Arc<dyn ModelService>`.
#[async_trait]
pub trait ModelService: Send + Sync {
    async fn invoke(&self, request: &AnalysisRequest) -> Result<ModelOutput, LlmError>;
}

#[async_trait]
impl ModelService for LlmClient {
    async fn invoke(&self, request: &AnalysisRequest) -> Result<ModelOutput, LlmError> {
        let response = self
            .call_with_tool(
                &request.prompt,
                &request.system,
                request.tool_name,
                &request.schema,
            )
            .await?;

        match response.into_tool_input(request.tool_name) {
            Ok(input) => Ok(ModelOutput::Structured(input)),
            Err(response) => response
                .text()
                .map(|text| ModelOutput::Text(text.to_string()))
                .ok_or(LlmError::EmptyContent),
        }
    }
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(_) | LlmError::Api { .. } => {
                AnalysisError::TransportFailure(err.to_string())
            }
            LlmError::Parse(_) | LlmError::EmptyContent => {
                AnalysisError::MalformedResponse(err.to_string())
            }
        }
    }
}

/// Sends one request to the model service and validates the answer.
pub async fn invoke(
    service: &dyn ModelService,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalysisError> {
    let raw = match service.invoke(request).await? {
        ModelOutput::Structured(value) => value,
        ModelOutput::Text(text) => parse_text(&text)?,
    };
    validate(raw)
}

/// Full pipeline: input check → request builder → invoker.
///
/// Empty content fails with `EmptyInput` before any network call.
pub async fn analyze_post(
    service: &dyn ModelService,
    content: &str,
    url: Option<String>,
) -> Result<AnalysisResult, AnalysisError> {
    let input = PostInput::new(content, url)?;
    let analysis_id = Uuid::new_v4();

    async move {
        info!(
            content_chars = input.content().chars().count(),
            has_link = input.url().is_some(),
            "Analyzing post"
        );

        let request = build_request(&input);
        match invoke(service, &request).await {
            Ok(result) => {
                info!(
                    score = result.score,
                    reach = ?result.perceived_reach.status,
                    "Analysis complete"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Analysis failed");
                Err(e)
            }
        }
    }
    .instrument(info_span!("analyze_post", %analysis_id))
    .await
}
