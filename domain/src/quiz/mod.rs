//! Quiz subdomain: generated items, the response schema and validation.
//!
//! A generation response flows through this module in one direction:
//!
//! ```text
//! JSON value ──▶ McqResponse (shape) ──▶ ResultValidator ──▶ QuestionSet
//! ```

pub mod entities;
pub mod schema;
pub mod validation;

/// Number of questions requested per generation
pub const QUESTION_COUNT: usize = 5;

/// Number of options every question must carry
pub const OPTION_COUNT: usize = 4;
