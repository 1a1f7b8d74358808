//! Result validation
//!
//! Runs strictly after a response has parsed into [`McqResponse`]. Parse
//! failures are the generation client's concern and never get here.

use super::OPTION_COUNT;
use super::entities::{McqItem, McqResponse, QuestionSet};
use thiserror::Error;

/// Why a single item was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    BlankQuestion,
    WrongOptionCount { found: usize },
    AnswerNotInOptions,
    AmbiguousAnswer { matches: usize },
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::BlankQuestion => write!(f, "question text is blank"),
            MalformedReason::WrongOptionCount { found } => {
                write!(f, "expected {} options, found {}", OPTION_COUNT, found)
            }
            MalformedReason::AnswerNotInOptions => write!(f, "answer is not one of the options"),
            MalformedReason::AmbiguousAnswer { matches } => {
                write!(f, "answer matches {} options", matches)
            }
        }
    }
}

/// Validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// `questions` missing or empty
    #[error("Response contained no questions")]
    NoResults,

    /// An item breaks the question invariants (index is 0-based)
    #[error("Question {index} is malformed: {reason}")]
    Malformed { index: usize, reason: MalformedReason },
}

/// Turns a parsed response into a [`QuestionSet`]
pub struct ResultValidator;

impl ResultValidator {
    pub fn validate(response: McqResponse) -> Result<QuestionSet, ResultError> {
        let items = match response.questions {
            Some(items) if !items.is_empty() => items,
            _ => return Err(ResultError::NoResults),
        };

        for (index, item) in items.iter().enumerate() {
            Self::check_item(item).map_err(|reason| ResultError::Malformed { index, reason })?;
        }

        Ok(QuestionSet::new(items))
    }

    fn check_item(item: &McqItem) -> Result<(), MalformedReason> {
        if item.question.trim().is_empty() {
            return Err(MalformedReason::BlankQuestion);
        }
        if item.options.len() != OPTION_COUNT {
            return Err(MalformedReason::WrongOptionCount {
                found: item.options.len(),
            });
        }
        match item.options.iter().filter(|o| item.is_correct(o)).count() {
            0 => Err(MalformedReason::AnswerNotInOptions),
            1 => Ok(()),
            matches => Err(MalformedReason::AmbiguousAnswer { matches }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(answer: &str) -> McqItem {
        McqItem::new(
            "What is the capital of France?",
            ["Paris", "Lyon", "Marseille", "Toulouse"],
            answer,
        )
    }

    #[test]
    fn test_valid_response_accepted() {
        let response = McqResponse {
            questions: Some(vec![item("Paris"), item("Lyon")]),
        };
        let set = ResultValidator::validate(response).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.items()[1].answer, "Lyon");
    }

    #[test]
    fn test_missing_questions_is_no_results() {
        let err = ResultValidator::validate(McqResponse::default()).unwrap_err();
        assert_eq!(err, ResultError::NoResults);
    }

    #[test]
    fn test_empty_questions_is_no_results() {
        let response: McqResponse = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert_eq!(ResultValidator::validate(response), Err(ResultError::NoResults));
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let mut bad = item("Paris");
        bad.options.pop();
        let response = McqResponse {
            questions: Some(vec![item("Paris"), bad]),
        };
        assert_eq!(
            ResultValidator::validate(response),
            Err(ResultError::Malformed {
                index: 1,
                reason: MalformedReason::WrongOptionCount { found: 3 },
            })
        );
    }

    #[test]
    fn test_answer_must_be_an_option() {
        let response = McqResponse {
            questions: Some(vec![item("Berlin")]),
        };
        let err = ResultValidator::validate(response).unwrap_err();
        assert!(matches!(
            err,
            ResultError::Malformed {
                index: 0,
                reason: MalformedReason::AnswerNotInOptions
            }
        ));
    }

    #[test]
    fn test_duplicate_correct_option_rejected() {
        let dup = McqItem::new("Q", ["Paris", "Paris", "Lyon", "Nice"], "Paris");
        let response = McqResponse {
            questions: Some(vec![dup]),
        };
        assert_eq!(
            ResultValidator::validate(response),
            Err(ResultError::Malformed {
                index: 0,
                reason: MalformedReason::AmbiguousAnswer { matches: 2 },
            })
        );
    }

    #[test]
    fn test_blank_question_rejected() {
        let blank = McqItem::new("  ", ["a", "b", "c", "d"], "a");
        let response = McqResponse {
            questions: Some(vec![blank]),
        };
        assert!(matches!(
            ResultValidator::validate(response),
            Err(ResultError::Malformed {
                reason: MalformedReason::BlankQuestion,
                ..
            })
        ));
    }
}
