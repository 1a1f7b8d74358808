//! Quiz entities

use serde::{Deserialize, Serialize};

/// One multiple-choice question as emitted by the model
///
/// All three fields are required on the wire; a response missing any of
/// them fails to deserialize and never reaches validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl McqItem {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Whether `option` is the correct answer (exact text match)
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

/// Top-level shape of a generation response
///
/// `questions` is optional here so that a well-formed but empty payload
/// can be told apart from one that does not parse at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct McqResponse {
    #[serde(default)]
    pub questions: Option<Vec<McqItem>>,
}

/// A validated, non-empty batch of questions for one submission
///
/// Only [`ResultValidator`](super::validation::ResultValidator) creates
/// these, so every item satisfies the option-count and answer invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    items: Vec<McqItem>,
}

impl QuestionSet {
    pub(crate) fn new(items: Vec<McqItem>) -> Self {
        debug_assert!(!items.is_empty());
        Self { items }
    }

    pub fn items(&self) -> &[McqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a validated set; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, McqItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<McqItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a McqItem;
    type IntoIter = std::slice::Iter<'a, McqItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
