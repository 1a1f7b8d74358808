//! Stale response policy

use serde::{Deserialize, Serialize};

/// What to do with a response that settles after a newer submission
/// has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop it; the latest submission owns the screen
    #[default]
    Discard,
    /// Apply it anyway; whichever request resolves last wins
    Apply,
}

impl StalePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StalePolicy::Discard => "discard",
            StalePolicy::Apply => "apply",
        }
    }
}

impl std::fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discard" => Ok(StalePolicy::Discard),
            "apply" => Ok(StalePolicy::Apply),
            other => Err(format!("unknown stale response policy: {other}")),
        }
    }
}
