//! Prompt templates for quiz generation

use crate::core::subject::Subject;
use crate::quiz::{OPTION_COUNT, QUESTION_COUNT};

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt asking for a batch of multiple-choice questions
    pub fn mcq_generation(subject: &Subject) -> String {
        format!(
            r#"Generate {} challenging multiple-choice questions for a competitive exam on the subject: "{}". Each question must have {} options."#,
            QUESTION_COUNT,
            subject.as_str(),
            OPTION_COUNT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcq_generation_format() {
        let subject = Subject::parse("Photosynthesis").unwrap();
        let prompt = PromptTemplate::mcq_generation(&subject);
        assert_eq!(
            prompt,
            "Generate 5 challenging multiple-choice questions for a competitive exam on the subject: \"Photosynthesis\". Each question must have 4 options."
        );
    }

    #[test]
    fn test_prompt_contains_subject_and_counts() {
        for raw in ["Rust", "  Organic chemistry ", "日本の歴史", "C++ \"templates\""] {
            let subject = Subject::parse(raw).unwrap();
            let prompt = PromptTemplate::mcq_generation(&subject);
            assert!(prompt.contains(subject.as_str()), "{prompt}");
            assert!(prompt.contains('5'));
            assert!(prompt.contains('4'));
        }
    }

    #[test]
    fn test_prompt_uses_trimmed_subject() {
        let subject = Subject::parse("   Algebra   ").unwrap();
        assert!(PromptTemplate::mcq_generation(&subject).contains("\"Algebra\""));
    }
}
