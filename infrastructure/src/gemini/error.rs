//! Error types for the Gemini adapter

use mcq_application::GenerationError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text (finish reason: {0})")]
    EmptyResponse(String),

    #[error("Model output is not valid JSON: {error}\nRaw output: {raw}")]
    NotJson { error: String, raw: String },

    #[error("API key not found; set {0} or gemini.api_key")]
    MissingApiKey(String),
}

impl From<GeminiError> for GenerationError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) => GenerationError::ConnectionError(e.to_string()),
            GeminiError::Status { status, message } => GenerationError::Status { status, message },
            // Raised while building settings, before any request exists
            missing @ GeminiError::MissingApiKey(_) => GenerationError::Other(missing.to_string()),
            other @ (GeminiError::Envelope(_)
            | GeminiError::Blocked(_)
            | GeminiError::EmptyResponse(_)
            | GeminiError::NotJson { .. }) => GenerationError::InvalidPayload(other.to_string()),
        }
    }
}
