//! Configuration file loading for mcq-forge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MCQ_FORGE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./mcq-forge.toml` or `./.mcq-forge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mcq-forge/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileOutputConfig, FileOutputFormat, FileSessionConfig,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;
