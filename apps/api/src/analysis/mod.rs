// Post analysis: request builder → model invoker → schema validation.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod error;
pub mod handlers;
pub mod invoker;
pub mod models;
pub mod prompts;
pub mod request_builder;
pub mod schema;
pub mod validation;

pub use error::AnalysisError;
pub use invoker::{analyze_post, ModelService};
