//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The subject was empty or whitespace only
    #[error("Please enter a subject.")]
    EmptySubject,
}
