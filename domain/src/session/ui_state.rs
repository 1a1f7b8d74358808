//! UI state and per-card reveal state

use crate::core::subject::Subject;
use crate::quiz::entities::{McqItem, QuestionSet};
use serde::{Deserialize, Serialize};

/// Monotonic stamp attached to every submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a card's answer has been disclosed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Mark applied to an option once its card is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionMark {
    Correct,
    Incorrect,
}

/// Result of asking a card to reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    AlreadyRevealed,
}

/// One question on screen together with its reveal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    item: McqItem,
    reveal: RevealState,
}

impl QuestionCard {
    pub fn new(item: McqItem) -> Self {
        Self {
            item,
            reveal: RevealState::Hidden,
        }
    }

    pub fn item(&self) -> &McqItem {
        &self.item
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal == RevealState::Revealed
    }

    /// The reveal control exists only while the answer is hidden
    pub fn has_reveal_control(&self) -> bool {
        !self.is_revealed()
    }

    /// One-way `Hidden -> Revealed` transition
    pub fn reveal(&mut self) -> RevealOutcome {
        match self.reveal {
            RevealState::Hidden => {
                self.reveal = RevealState::Revealed;
                RevealOutcome::Revealed
            }
            RevealState::Revealed => RevealOutcome::AlreadyRevealed,
        }
    }

    /// Per-option marks, in option order; `None` while hidden
    pub fn marks(&self) -> Option<Vec<OptionMark>> {
        if !self.is_revealed() {
            return None;
        }
        Some(
            self.item
                .options
                .iter()
                .map(|option| {
                    if self.item.is_correct(option) {
                        OptionMark::Correct
                    } else {
                        OptionMark::Incorrect
                    }
                })
                .collect(),
        )
    }
}

/// The result screen for one successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBoard {
    subject: Subject,
    cards: Vec<QuestionCard>,
}

impl QuizBoard {
    pub fn new(subject: Subject, set: QuestionSet) -> Self {
        Self {
            subject,
            cards: set.into_items().into_iter().map(QuestionCard::new).collect(),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn cards(&self) -> &[QuestionCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Reveal one card by 0-based index; `None` if out of range
    pub fn reveal(&mut self, index: usize) -> Option<RevealOutcome> {
        self.cards.get_mut(index).map(QuestionCard::reveal)
    }

    /// Reveal every hidden card, returning how many changed
    pub fn reveal_all(&mut self) -> usize {
        self.cards
            .iter_mut()
            .map(QuestionCard::reveal)
            .filter(|outcome| *outcome == RevealOutcome::Revealed)
            .count()
    }
}

/// What the front end is showing. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading { subject: Subject, ticket: Ticket },
    Success(QuizBoard),
    Error(String),
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading { .. } => "loading",
            UiState::Success(_) => "success",
            UiState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn board(&self) -> Option<&QuizBoard> {
        match self {
            UiState::Success(board) => Some(board),
            _ => None,
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut QuizBoard> {
        match self {
            UiState::Success(board) => Some(board),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}
