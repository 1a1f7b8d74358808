//! Gemini API configuration from TOML (`[gemini]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode};
use mcq_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API provider configuration.
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// api_key_env = "GEMINI_API_KEY"
/// # timeout_seconds = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier passed in the request path.
    pub model: String,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Request timeout; unset means wait as long as the transport does.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// Parse the model name, falling back to the default for blank input
    pub fn parse_model(&self) -> Model {
        if self.model.trim().is_empty() {
            return Model::default();
        }
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    /// Resolve the API key: an explicit `api_key` wins over the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "gemini.model: model name cannot be empty",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                "gemini.base_url: base URL cannot be empty",
            ));
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "gemini.timeout_seconds cannot be 0",
            ));
        }
        issues
    }
}
