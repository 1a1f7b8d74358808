//! Application layer for mcq-forge
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    generator::{GenerationError, GenerationRequest, StructuredGenerator},
    state_observer::{NoObserver, StateObserver},
};
pub use use_cases::generate_quiz::{ErrorKind, GenerateQuizUseCase, QuizError};
pub use use_cases::quiz_controller::{QuizController, RevealError, Settlement, Submission};
