//! Request Builder — turns a `PostInput` into a model invocation request.

use serde_json::Value;

use crate::analysis::models::PostInput;
use crate::analysis::prompts::{
    ANALYSIS_INSTRUCTIONS, ANALYSIS_SYSTEM, CONTENT_HEADER, LINK_PREFIX,
};
use crate::analysis::schema::{analysis_schema, ANALYSIS_TOOL_NAME};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Everything the model service needs for one analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub system: String,
    pub prompt: String,
    pub tool_name: &'static str,
    /// JSON-Schema of the expected structured output.
    pub schema: Value,
}

/// Builds the analysis request. Pure and infallible: `PostInput` already guarantees
/// non-empty content.
pub fn build_request(input: &PostInput) -> AnalysisRequest {
    let link_section = match input.url() {
        Some(url) => format!("{LINK_PREFIX}{url}\n\n"),
        None => String::new(),
    };

    let prompt = format!(
        "{ANALYSIS_INSTRUCTIONS}\n\n{link_section}{CONTENT_HEADER}\n{}",
        input.content()
    );

    AnalysisRequest {
        system: format!("{ANALYSIS_SYSTEM} {JSON_ONLY_SYSTEM}"),
        prompt,
        tool_name: ANALYSIS_TOOL_NAME,
        schema: analysis_schema(),
    }
}
