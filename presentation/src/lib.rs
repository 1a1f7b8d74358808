//! Presentation layer for mcq-forge
//!
//! This crate contains CLI definitions, card formatting,
//! progress reporting, and the interactive quiz session.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::report::QuizReport;
pub use progress::reporter::ConsoleObserver;
pub use session::one_shot::OneShot;
pub use session::repl::QuizRepl;
