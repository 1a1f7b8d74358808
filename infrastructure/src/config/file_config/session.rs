//! Interactive session configuration from TOML (`[session]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode};
use mcq_domain::StalePolicy;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// What to do with a result that settles after a newer submission
    /// (`discard` or `apply`)
    pub stale_responses: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            stale_responses: StalePolicy::default().to_string(),
        }
    }
}

impl FileSessionConfig {
    /// Parse `stale_responses`, falling back to the default with a warning
    pub fn parse_stale_policy(&self) -> (StalePolicy, Vec<ConfigIssue>) {
        match self.stale_responses.parse() {
            Ok(policy) => (policy, Vec::new()),
            Err(_) => (
                StalePolicy::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "session.stale_responses".to_string(),
                        value: self.stale_responses.clone(),
                        valid_values: vec!["discard".to_string(), "apply".to_string()],
                    },
                    format!(
                        "session.stale_responses: unknown value '{}', falling back to '{}'",
                        self.stale_responses,
                        StalePolicy::default()
                    ),
                )],
            ),
        }
    }
}
