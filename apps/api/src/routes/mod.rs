pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::invoker::tests::{FakeModel, Reply};
    use crate::analysis::invoker::ModelOutput;
    use crate::analysis::request_builder::AnalysisRequest;
    use crate::analysis::validation::tests::valid_response;
    use crate::analysis::ModelService;
    use crate::config::Config;
    use crate::errors::{ANALYSIS_FAILED_MESSAGE, EMPTY_INPUT_MESSAGE};
    use crate::llm_client::{LlmError, DEFAULT_API_URL};

    /// Never answers within any sane timeout.
    struct StalledModel;

    #[async_trait]
    impl ModelService for StalledModel {
        async fn invoke(&self, _request: &AnalysisRequest) -> Result<ModelOutput, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(ModelOutput::Structured(valid_response()))
        }
    }

    fn test_config() -> Config {
        Config {
            anthropic_api_key: "sk-ant-test".to_string(),
            anthropic_api_url: DEFAULT_API_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            analysis_timeout: Duration::from_secs(5),
        }
    }

    fn app(model: Arc<dyn ModelService>) -> Router {
        build_router(AppState {
            model,
            config: test_config(),
        })
    }

    async fn post_analyze(app: Router, body: Value) -> (StatusCode, Value) {
        post_raw(app, body.to_string()).await
    }

    async fn post_raw(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::new(FakeModel::new(Reply::Empty)))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_returns_analysis_and_band() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, body) = post_analyze(
            app(model.clone()),
            json!({"content": "Excited to share our Q3 results!", "url": ""}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["score"], 82);
        assert_eq!(body["analysis"]["perceivedReach"]["status"], "High");
        assert_eq!(body["analysis"]["metricBreakdown"]["formatting"], 90);
        assert_eq!(body["scoreBand"], "strong");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_url_is_optional() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, _) = post_analyze(app(model), json!({"content": "Post"})).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_content_is_rejected_without_model_call() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, body) = post_analyze(app(model.clone()), json!({"content": "   "})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EMPTY_INPUT");
        assert_eq!(body["error"]["message"], EMPTY_INPUT_MESSAGE);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_field_is_validation_error() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, body) = post_analyze(app(model.clone()), json!({"url": "x"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("content"));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_non_json_body_is_validation_error() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, body) = post_raw(app(model.clone()), "not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_wrong_content_type_in_body_is_validation_error() {
        let model = Arc::new(FakeModel::new(Reply::Structured(valid_response())));

        let (status, body) = post_analyze(app(model), json!({"content": 5})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_schema_violation_uses_generic_message() {
        let mut raw = valid_response();
        raw["perceivedReach"]["status"] = json!("medium");
        let model = Arc::new(FakeModel::new(Reply::Structured(raw)));

        let (status, body) = post_analyze(app(model), json!({"content": "Post"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "SCHEMA_VIOLATION");
        assert_eq!(body["error"]["message"], ANALYSIS_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_upstream_error_is_transport_failure() {
        let model = Arc::new(FakeModel::new(Reply::Status(401)));

        let (status, body) = post_analyze(app(model), json!({"content": "Post"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "TRANSPORT_FAILURE");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_transport_failure() {
        let (status, body) =
            post_analyze(app(Arc::new(StalledModel)), json!({"content": "Post"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "TRANSPORT_FAILURE");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = app(Arc::new(FakeModel::new(Reply::Empty)))
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
