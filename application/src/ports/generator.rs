//! Structured generator port
//!
//! Defines the interface for asking a model for schema-constrained JSON.

use async_trait::async_trait;
use mcq_domain::Model;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a generation round trip
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single structured-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: Model,
    pub prompt: String,
    /// Response schema the model output must conform to
    pub schema: Value,
}

impl GenerationRequest {
    pub fn new(model: Model, prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            schema,
        }
    }
}

/// Gateway for schema-constrained generation
///
/// Implementations perform exactly one round trip per call and must not
/// retry on their own. The returned value is the parsed JSON document the
/// model produced.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "generator"
    }
}
