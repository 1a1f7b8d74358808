//! Infrastructure layer for mcq-forge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fixture;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileOutputFormat, FileSessionConfig, Severity,
};
pub use fixture::FixtureGenerator;
pub use gemini::{
    error::GeminiError,
    generator::{GeminiGenerator, GeminiSettings},
};
