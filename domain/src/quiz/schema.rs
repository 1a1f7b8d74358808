//! Response schema for structured generation
//!
//! The schema is written in the OpenAPI subset accepted by Gemini's
//! `generationConfig.responseSchema` (upper-case `type` names). It pins the
//! shape only: the number of questions and options is requested by the
//! prompt and checked by [`ResultValidator`](super::validation::ResultValidator).

use serde_json::{Value, json};

/// Builder for the multiple-choice response schema
pub struct McqSchema;

impl McqSchema {
    /// Field names every question object must carry
    pub const REQUIRED_ITEM_FIELDS: [&'static str; 3] = ["question", "options", "answer"];

    /// The full response schema
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "questions": {
                    "type": "ARRAY",
                    "description": "An array of multiple-choice questions.",
                    "items": Self::item_schema(),
                },
            },
            "required": ["questions"],
        })
    }

    /// Schema of a single question object
    pub fn item_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The question text.",
                },
                "options": {
                    "type": "ARRAY",
                    "description": format!("An array of {} possible answers.", super::OPTION_COUNT),
                    "items": { "type": "STRING" },
                },
                "answer": {
                    "type": "STRING",
                    "description": "The correct answer from the options.",
                },
            },
            "required": Self::REQUIRED_ITEM_FIELDS,
        })
    }
}
