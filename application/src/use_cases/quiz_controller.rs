//! Quiz controller
//!
//! Owns the [`UiState`] for one interactive session and applies every
//! transition: submission, settlement of a generation result, and card
//! reveals. Network work happens outside; the controller only hands out a
//! [`Submission`] and later takes the outcome back through [`QuizController::settle`].
//!
//! ```text
//! Idle ──submit──▶ Loading ──settle(Ok)──▶ Success
//!   │                 │                      │
//!   └─blank input─▶ Error ◀──settle(Err)─────┘ (next submit re-enters Loading)
//! ```

use crate::ports::state_observer::{NoObserver, StateObserver};
use crate::use_cases::generate_quiz::{GenerateQuizUseCase, QuizError};
use mcq_domain::{
    QuestionSet, QuizBoard, RevealOutcome, StalePolicy, Subject, Ticket, UiState, View, render,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// An accepted submission awaiting its generation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub subject: Subject,
}

/// What happened to a settled result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// A newer submission exists and the policy drops older results
    Discarded,
}

/// Errors from reveal actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("No questions are on screen")]
    NothingToReveal,

    #[error("Question {number} does not exist (1-{count})")]
    OutOfRange { number: usize, count: usize },
}

/// Drives the UI state machine
pub struct QuizController {
    state: UiState,
    latest: Option<Ticket>,
    policy: StalePolicy,
    observer: Arc<dyn StateObserver>,
}

impl QuizController {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            state: UiState::Idle,
            latest: None,
            policy,
            observer: Arc::new(NoObserver),
        }
    }

    /// Create with an observer notified on every transition
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Ticket of the most recent accepted submission
    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.latest
    }

    /// Accept raw input and enter `Loading`
    ///
    /// Blank input goes straight to `Error` and returns `None`; no request
    /// should be issued. Any displayed results are cleared immediately.
    pub fn submit(&mut self, raw_subject: &str) -> Option<Submission> {
        let subject = match Subject::parse(raw_subject) {
            Ok(subject) => subject,
            Err(e) => {
                let err = QuizError::from(e);
                warn!("Rejected submission: {}", err);
                self.transition(UiState::Error(err.user_message().to_string()));
                return None;
            }
        };

        let ticket = self.latest.map_or(Ticket::new(1), |t| t.next());
        self.latest = Some(ticket);
        info!("Submission {} for '{}'", ticket, subject);

        self.transition(UiState::Loading {
            subject: subject.clone(),
            ticket,
        });
        Some(Submission { ticket, subject })
    }

    /// Apply the outcome of a submission's generation request
    pub fn settle(
        &mut self,
        submission: Submission,
        outcome: Result<QuestionSet, QuizError>,
    ) -> Settlement {
        if self.policy == StalePolicy::Discard && self.latest != Some(submission.ticket) {
            debug!(
                "Discarding stale result for submission {} (latest {:?})",
                submission.ticket,
                self.latest.map(|t| t.value())
            );
            return Settlement::Discarded;
        }

        let next = match outcome {
            Ok(set) => {
                info!(
                    "Submission {} succeeded with {} questions",
                    submission.ticket,
                    set.len()
                );
                UiState::Success(QuizBoard::new(submission.subject, set))
            }
            Err(e) => {
                warn!("Submission {} failed: {}", submission.ticket, e);
                UiState::Error(e.user_message().to_string())
            }
        };
        self.transition(next);
        Settlement::Applied
    }

    /// Submit, generate and settle in one go
    ///
    /// Used by one-shot front ends that never overlap submissions.
    pub async fn run(&mut self, use_case: &GenerateQuizUseCase, raw_subject: &str) -> &UiState {
        if let Some(submission) = self.submit(raw_subject) {
            let outcome = use_case.generate(&submission.subject).await;
            self.settle(submission, outcome);
        }
        &self.state
    }

    /// Reveal one card by 0-based index
    ///
    /// Revealing an already revealed card changes nothing and triggers no
    /// redraw.
    pub fn reveal(&mut self, index: usize) -> Result<RevealOutcome, RevealError> {
        let board = self
            .state
            .board_mut()
            .ok_or(RevealError::NothingToReveal)?;
        let count = board.len();
        let outcome = board.reveal(index).ok_or(RevealError::OutOfRange {
            number: index + 1,
            count,
        })?;

        if outcome == RevealOutcome::Revealed {
            debug!("Revealed card {}", index + 1);
            self.observer.on_transition(&self.state);
        }
        Ok(outcome)
    }

    /// Reveal every hidden card, returning how many changed
    pub fn reveal_all(&mut self) -> Result<usize, RevealError> {
        let board = self
            .state
            .board_mut()
            .ok_or(RevealError::NothingToReveal)?;
        let changed = board.reveal_all();
        if changed > 0 {
            self.observer.on_transition(&self.state);
        }
        Ok(changed)
    }

    fn transition(&mut self, next: UiState) {
        debug!("UI state {} -> {}", self.state.name(), next.name());
        self.state = next;
        self.observer.on_transition(&self.state);
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}
