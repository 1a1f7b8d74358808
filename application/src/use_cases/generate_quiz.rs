//! Generate Quiz use case
//!
//! Subject → prompt + schema → structured generation → validated
//! [`QuestionSet`]. One round trip per call, no retry.

use crate::ports::generator::{GenerationError, GenerationRequest, StructuredGenerator};
use mcq_domain::util::preview;
use mcq_domain::{
    DomainError, McqResponse, McqSchema, Model, PromptTemplate, QuestionSet, ResultError,
    ResultValidator, Subject,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub const VALIDATION_MESSAGE: &str = "Please enter a subject.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate MCQs. Please check your connection and try again.";
pub const NO_RESULTS_MESSAGE: &str = "Could not generate MCQs. Please try another subject.";

/// User-facing error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    GenerationFailed,
    NoResults,
}

/// Errors that can occur while generating a quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid subject: {0}")]
    Validation(#[from] DomainError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// The payload parsed but breaks the question invariants
    #[error("Malformed response: {0}")]
    Malformed(ResultError),

    #[error("No questions were generated")]
    NoResults,
}

impl From<ResultError> for QuizError {
    fn from(err: ResultError) -> Self {
        match err {
            ResultError::NoResults => QuizError::NoResults,
            malformed @ ResultError::Malformed { .. } => QuizError::Malformed(malformed),
        }
    }
}

impl QuizError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::Validation(_) => ErrorKind::Validation,
            QuizError::Generation(_) | QuizError::Malformed(_) => ErrorKind::GenerationFailed,
            QuizError::NoResults => ErrorKind::NoResults,
        }
    }

    /// Message shown in the error banner
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => VALIDATION_MESSAGE,
            ErrorKind::GenerationFailed => GENERATION_FAILED_MESSAGE,
            ErrorKind::NoResults => NO_RESULTS_MESSAGE,
        }
    }
}

/// Use case for generating one batch of questions
#[derive(Clone)]
pub struct GenerateQuizUseCase {
    generator: Arc<dyn StructuredGenerator>,
    model: Model,
}

impl GenerateQuizUseCase {
    pub fn new(generator: Arc<dyn StructuredGenerator>, model: Model) -> Self {
        Self { generator, model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Validate raw input, then generate
    ///
    /// Blank input fails before the generator is touched.
    pub async fn execute(&self, raw_subject: &str) -> Result<QuestionSet, QuizError> {
        let subject = Subject::parse(raw_subject)?;
        self.generate(&subject).await
    }

    /// Build the request for an accepted subject
    pub fn build_request(&self, subject: &Subject) -> GenerationRequest {
        GenerationRequest::new(
            self.model.clone(),
            PromptTemplate::mcq_generation(subject),
            McqSchema::response_schema(),
        )
    }

    /// Generate and validate questions for an accepted subject
    pub async fn generate(&self, subject: &Subject) -> Result<QuestionSet, QuizError> {
        info!(
            "Generating questions for '{}' with {} via {}",
            preview(subject.as_str(), 80),
            self.model,
            self.generator.name()
        );

        let request = self.build_request(subject);
        debug!("Prompt: {}", request.prompt);

        let value = self.generator.generate(&request).await?;

        // serde accepts a sequence for a struct, so `[]` would parse as empty
        if !value.is_object() {
            return Err(GenerationError::InvalidPayload(
                "expected a JSON object at the top level".to_string(),
            )
            .into());
        }

        let response: McqResponse = serde_json::from_value(value)
            .map_err(|e| GenerationError::InvalidPayload(e.to_string()))?;

        let set = ResultValidator::validate(response)?;
        info!("Generated {} questions", set.len());
        Ok(set)
    }
}
