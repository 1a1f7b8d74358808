//! Pure mapping from [`UiState`] to display elements

use super::ui_state::{OptionMark, QuestionCard, UiState};
use serde::Serialize;

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Submit control enabled
    pub submit_enabled: bool,
    /// Progress indicator shown in place of the submit label
    pub loading: bool,
    pub body: ViewBody,
}

/// The results area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum ViewBody {
    Empty,
    Error(String),
    Cards(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// `Q<n>: <question>` with a 1-based index
    pub heading: String,
    pub options: Vec<OptionView>,
    pub reveal_control: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub text: String,
    pub mark: Option<OptionMark>,
}

/// Render the given state
pub fn render(state: &UiState) -> View {
    let loading = state.is_loading();
    let body = match state {
        UiState::Idle | UiState::Loading { .. } => ViewBody::Empty,
        UiState::Error(message) => ViewBody::Error(message.clone()),
        UiState::Success(board) => ViewBody::Cards(
            board
                .cards()
                .iter()
                .enumerate()
                .map(|(index, card)| render_card(index, card))
                .collect(),
        ),
    };

    View {
        submit_enabled: !loading,
        loading,
        body,
    }
}

fn render_card(index: usize, card: &QuestionCard) -> CardView {
    let marks = card.marks();
    let options = card
        .item()
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| OptionView {
            text: text.clone(),
            mark: marks.as_ref().map(|m| m[i]),
        })
        .collect();

    CardView {
        heading: format!("Q{}: {}", index + 1, card.item().question),
        options,
        reveal_control: card.has_reveal_control(),
    }
}

impl View {
    pub fn cards(&self) -> &[CardView] {
        match &self.body {
            ViewBody::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subject::Subject;
    use crate::quiz::entities::{McqItem, McqResponse};
    use crate::quiz::validation::ResultValidator;
    use crate::session::ui_state::{QuizBoard, Ticket};

    fn photosynthesis_board() -> QuizBoard {
        let items = (1..=5)
            .map(|i| {
                McqItem::new(
                    format!("Photosynthesis question {i}"),
                    ["Chlorophyll", "Mitochondria", "Ribosome", "Nucleus"],
                    "Chlorophyll",
                )
            })
            .collect();
        let set = ResultValidator::validate(McqResponse {
            questions: Some(items),
        })
        .unwrap();
        QuizBoard::new(Subject::parse("Photosynthesis").unwrap(), set)
    }

    #[test]
    fn test_idle_view() {
        let view = render(&UiState::Idle);
        assert!(view.submit_enabled);
        assert!(!view.loading);
        assert_eq!(view.body, ViewBody::Empty);
    }

    #[test]
    fn test_loading_view_disables_submit_and_clears_results() {
        let state = UiState::Loading {
            subject: Subject::parse("Rust").unwrap(),
            ticket: Ticket::new(1),
        };
        let view = render(&state);
        assert!(!view.submit_enabled);
        assert!(view.loading);
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_error_view() {
        let view = render(&UiState::Error("Please enter a subject.".into()));
        assert!(view.submit_enabled);
        assert_eq!(view.body, ViewBody::Error("Please enter a subject.".into()));
    }

    #[test]
    fn test_one_card_per_question_and_one_option_per_option() {
        let board = photosynthesis_board();
        let view = render(&UiState::Success(board.clone()));
        assert_eq!(view.cards().len(), board.len());
        for (card, source) in view.cards().iter().zip(board.cards()) {
            assert_eq!(card.options.len(), source.item().options.len());
            assert!(card.reveal_control);
            assert!(card.options.iter().all(|o| o.mark.is_none()));
        }
        assert_eq!(view.cards()[0].heading, "Q1: Photosynthesis question 1");
        assert_eq!(view.cards()[4].heading, "Q5: Photosynthesis question 5");
    }

    #[test]
    fn test_revealed_card_view() {
        let mut board = photosynthesis_board();
        board.reveal(2);
        let view = render(&UiState::Success(board));
        let card = &view.cards()[2];
        assert!(!card.reveal_control);
        assert_eq!(card.options[0].mark, Some(OptionMark::Correct));
        assert!(card.options[1..].iter().all(|o| o.mark == Some(OptionMark::Incorrect)));
        assert!(view.cards()[0].reveal_control);
    }

    #[test]
    fn test_render_is_pure() {
        let state = UiState::Success(photosynthesis_board());
        assert_eq!(render(&state), render(&state));
    }
}
