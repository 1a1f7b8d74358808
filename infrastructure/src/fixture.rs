//! Canned-output generator
//!
//! Serves a JSON document from disk instead of calling a model. Useful for
//! demos and for exercising the front end without network access.

use async_trait::async_trait;
use mcq_application::{GenerationError, GenerationRequest, StructuredGenerator};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// [`StructuredGenerator`] that returns the contents of a JSON file
pub struct FixtureGenerator {
    path: PathBuf,
}

impl FixtureGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl StructuredGenerator for FixtureGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        debug!(
            "Serving fixture {} for model {}",
            self.path.display(),
            request.model
        );

        // Re-read on every call so edits show up on the next submission
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GenerationError::ConnectionError(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(text.trim())
            .map_err(|e| GenerationError::InvalidPayload(format!("{}: {}", self.path.display(), e)))
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
