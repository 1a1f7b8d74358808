//! Gemini structured generator

use super::error::{GeminiError, Result};
use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use mcq_application::{GenerationError, GenerationRequest, StructuredGenerator};
use mcq_domain::Model;
use mcq_domain::util::preview;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiGenerator`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key: String,
    /// `None` leaves the request unbounded
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    /// Build settings from the `[gemini]` section, resolving the API key
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GeminiError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self {
            base_url: config.base_url.clone(),
            api_key,
            timeout: config.timeout(),
        })
    }
}

/// [`StructuredGenerator`] backed by the Gemini `generateContent` endpoint
pub struct GeminiGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("mcq-forge/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
        })
    }

    /// URL of the `generateContent` method for `model`
    pub fn endpoint(&self, model: &Model) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn generate_content(&self, request: &GenerationRequest) -> Result<Value> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::structured(&request.prompt, request.schema.clone());
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_response(status, &text)
    }
}

#[async_trait]
impl StructuredGenerator for GeminiGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<Value, GenerationError> {
        self.generate_content(request).await.map_err(|e| {
            warn!("Gemini request failed: {}", e);
            GenerationError::from(e)
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Turn an HTTP status and body into the model's JSON output
pub fn parse_response(status: u16, body: &str) -> Result<Value> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| preview(body, 200));
        return Err(GeminiError::Status { status, message });
    }

    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(GeminiError::Envelope)?;

    if let Some(reason) = response.block_reason() {
        return Err(GeminiError::Blocked(reason.to_string()));
    }

    let text = response.text().ok_or_else(|| {
        GeminiError::EmptyResponse(response.finish_reason().unwrap_or("none").to_string())
    })?;

    let trimmed = text.trim();
    serde_json::from_str(trimmed).map_err(|e| GeminiError::NotJson {
        error: e.to_string(),
        raw: preview(trimmed, 500),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    fn generator(base_url: &str) -> GeminiGenerator {
        GeminiGenerator::new(GeminiSettings {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            timeout: None,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_format() {
        let generator = generator("https://generativelanguage.googleapis.com/");
        assert_eq!(
            generator.endpoint(&Model::Gemini25Flash),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_parse_structured_output() {
        let body = envelope("  {\"questions\": [{\"question\": \"Q\", \"options\": [\"a\",\"b\",\"c\",\"d\"], \"answer\": \"a\"}]}\n");
        let value = parse_response(200, &body).unwrap();
        assert_eq!(value["questions"][0]["answer"], "a");
    }

    #[test]
    fn test_server_error_status() {
        let body = r#"{ "error": { "code": 500, "message": "Internal error encountered.", "status": "INTERNAL" } }"#;
        let err = parse_response(500, body).unwrap_err();
        assert!(matches!(
            &err,
            GeminiError::Status { status: 500, message } if message == "Internal error encountered."
        ));
        assert!(matches!(
            GenerationError::from(err),
            GenerationError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn test_status_with_non_json_body() {
        let err = parse_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GeminiError::Status { status: 502, message } if message.contains("Bad Gateway")));
    }

    #[test]
    fn test_model_text_not_json() {
        let err = parse_response(200, &envelope("Here are your questions!")).unwrap_err();
        assert!(matches!(err, GeminiError::NotJson { .. }));
        assert!(matches!(
            GenerationError::from(err),
            GenerationError::InvalidPayload(_)
        ));
    }

    #[test]
    fn test_not_json_keeps_one_line_excerpt() {
        let text = format!("Sure!\n\n{}", "Question about cells. ".repeat(50));
        let err = parse_response(200, &envelope(&text)).unwrap_err();
        let raw = match err {
            GeminiError::NotJson { raw, .. } => raw,
            other => panic!("expected NotJson, got {other:?}"),
        };
        assert!(raw.starts_with("Sure! Question about cells."));
        assert!(raw.ends_with("..."));
        assert!(!raw.contains('\n'));
        assert_eq!(raw.chars().count(), 503);
    }

    #[test]
    fn test_envelope_not_json() {
        let err = parse_response(200, "not json at all").unwrap_err();
        assert!(matches!(err, GeminiError::Envelope(_)));
    }

    #[test]
    fn test_blocked_prompt() {
        let body = r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#;
        assert!(matches!(parse_response(200, body), Err(GeminiError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn test_no_candidates() {
        let body = r#"{ "candidates": [{ "finishReason": "MAX_TOKENS" }] }"#;
        assert!(matches!(
            parse_response(200, body),
            Err(GeminiError::EmptyResponse(reason)) if reason == "MAX_TOKENS"
        ));
    }

    #[test]
    fn test_settings_require_api_key() {
        let config = FileGeminiConfig {
            api_key: None,
            api_key_env: "MCQ_FORGE_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            GeminiSettings::from_config(&config),
            Err(GeminiError::MissingApiKey(var)) if var == "MCQ_FORGE_TEST_UNSET_KEY_VAR"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Freed port: nothing listens there once the listener is dropped
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let generator = generator(&format!("http://127.0.0.1:{port}"));
        let request = GenerationRequest::new(Model::default(), "prompt", json!({}));
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::ConnectionError(_)));
    }
}
