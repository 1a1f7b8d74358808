//! Output format value object

use serde::{Deserialize, Serialize};

/// How a generated quiz is written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered question cards (default)
    #[default]
    Cards,
    /// The validated question set as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cards() {
        assert_eq!(OutputFormat::default(), OutputFormat::Cards);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        let format: OutputFormat = serde_json::from_str("\"cards\"").unwrap();
        assert_eq!(format, OutputFormat::Cards);
    }
}
