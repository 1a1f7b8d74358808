//! Subject value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The topic a quiz is generated for (Value Object)
///
/// Always trimmed and never empty. Construction is the only place the
/// blank-input check happens, so holding a `Subject` means the input has
/// already been accepted and a request may be issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject {
    text: String,
}

impl Subject {
    /// Trim the raw input and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::EmptySubject);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Get the subject text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_inner(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Subject {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_is_trimmed() {
        let subject = Subject::parse("  Photosynthesis \n").unwrap();
        assert_eq!(subject.as_str(), "Photosynthesis");
    }

    #[test]
    fn test_blank_subjects_rejected() {
        for raw in ["", " ", "   ", "\t\n", "\u{3000}"] {
            assert_eq!(Subject::parse(raw), Err(DomainError::EmptySubject), "{raw:?}");
        }
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let subject: Subject = " World War II ".parse().unwrap();
        assert_eq!(subject.to_string(), "World War II");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Subject>("\"  \"").is_err());
        let subject: Subject = serde_json::from_str("\" Rust \"").unwrap();
        assert_eq!(subject.as_str(), "Rust");
    }
}
