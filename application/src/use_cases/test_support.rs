//! Scripted generator shared by use case tests

use crate::ports::generator::{GenerationError, GenerationRequest, StructuredGenerator};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns queued results in order and records every request
pub(crate) struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<Value, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_ok(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    pub(crate) fn push_err(&self, err: GenerationError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl StructuredGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Other("no scripted response".into())))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// A well-formed payload with `n` questions whose answer is always the
/// second option
pub(crate) fn questions_json(n: usize) -> Value {
    let questions: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "question": format!("Question {i}?"),
                "options": ["Alpha", "Beta", "Gamma", "Delta"],
                "answer": "Beta",
            })
        })
        .collect();
    json!({ "questions": questions })
}
