use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound the HTTP layer puts around one analysis.
    pub analysis_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("anthropic_api_key", &"[REDACTED]")
            .field("anthropic_api_url", &self.anthropic_api_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("analysis_timeout", &self.analysis_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            var(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let analysis_timeout_secs = match var("ANALYSIS_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_ANALYSIS_TIMEOUT_SECS,
        };
        if analysis_timeout_secs == 0 {
            bail!("ANALYSIS_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            anthropic_api_url: var("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analysis_timeout: Duration::from_secs(analysis_timeout_secs),
        })
    }
}
