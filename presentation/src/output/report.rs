//! JSON report for a generated quiz

use chrono::{DateTime, Utc};
use mcq_domain::{McqItem, Model, QuizBoard};
use serde::Serialize;

/// Machine-readable result of one successful generation
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub subject: String,
    pub model: Model,
    pub generated_at: DateTime<Utc>,
    pub questions: Vec<McqItem>,
}

impl QuizReport {
    pub fn from_board(board: &QuizBoard, model: &Model) -> Self {
        Self {
            subject: board.subject().to_string(),
            model: model.clone(),
            generated_at: Utc::now(),
            questions: board.cards().iter().map(|c| c.item().clone()).collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
