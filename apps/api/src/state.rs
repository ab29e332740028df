use std::sync::Arc;

use crate::analysis::ModelService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `LlmClient` in production, fakes in tests.
    pub model: Arc<dyn ModelService>,
    pub config: Config,
}
