//! Domain layer for mcq-forge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Structured generation
//!
//! A [`Subject`] is turned into a prompt by [`PromptTemplate`] and sent
//! together with [`McqSchema`] so the model answers with JSON of a known
//! shape. The reply is parsed into [`McqResponse`] and checked by
//! [`ResultValidator`], producing a [`QuestionSet`].
//!
//! ## UI state
//!
//! [`UiState`] is `Idle`, `Loading`, `Success` or `Error`. A successful
//! screen is a [`QuizBoard`] of [`QuestionCard`]s, each with a one-shot
//! reveal. [`render`] maps a state to a [`View`].

pub mod config;
pub mod core;
pub mod prompt;
pub mod quiz;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::{OutputFormat, StalePolicy};
pub use core::{error::DomainError, model::Model, subject::Subject};
pub use prompt::PromptTemplate;
pub use quiz::{
    OPTION_COUNT, QUESTION_COUNT,
    entities::{McqItem, McqResponse, QuestionSet},
    schema::McqSchema,
    validation::{MalformedReason, ResultError, ResultValidator},
};
pub use session::{
    ui_state::{
        OptionMark, QuestionCard, QuizBoard, RevealOutcome, RevealState, Ticket, UiState,
    },
    view::{CardView, OptionView, View, ViewBody, render},
};
