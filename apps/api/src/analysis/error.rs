use thiserror::Error;

/// Classified failure of a single post analysis.
///
/// Every variant is retryable by the caller; none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Post content was empty after trimming. No model call is made.
    #[error("post content is empty")]
    EmptyInput,

    /// Model service unreachable, rejected the request, or timed out.
    #[error("model transport failure: {0}")]
    TransportFailure(String),

    /// Model answered with something that is not structured data.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// Structured data that does not fit the AnalysisResult shape.
    #[error("schema violation at `{path}`: {reason}")]
    SchemaViolation { path: String, reason: String },
}

impl AnalysisError {
    pub(crate) fn violation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::SchemaViolation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, used in HTTP error bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "EMPTY_INPUT",
            AnalysisError::TransportFailure(_) => "TRANSPORT_FAILURE",
            AnalysisError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AnalysisError::SchemaViolation { .. } => "SCHEMA_VIOLATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_distinct() {
        let kinds = [
            AnalysisError::EmptyInput.kind(),
            AnalysisError::TransportFailure("x".into()).kind(),
            AnalysisError::MalformedResponse("x".into()).kind(),
            AnalysisError::violation("score", "x").kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_schema_violation_message_names_path() {
        let err = AnalysisError::violation("engagementStrategy.toGetMoreLikes", "missing");
        assert!(err
            .to_string()
            .contains("engagementStrategy.toGetMoreLikes"));
    }
}
