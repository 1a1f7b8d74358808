//! One-shot generation for `mcq-forge <SUBJECT>`
//!
//! Only the spinner is live while the request runs. The result is drawn
//! once, after the optional reveal, and without `:reveal` hints since no
//! session follows.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ConsoleObserver;
use mcq_application::{GenerateQuizUseCase, QuizController};
use mcq_domain::StalePolicy;
use std::sync::Arc;
use tracing::debug;

/// Runs a single submission to completion
pub struct OneShot {
    show_progress: bool,
    reveal: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            reveal: false,
        }
    }

    /// Set whether to show the loading spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Reveal every answer before drawing
    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    pub async fn run(&self, use_case: &GenerateQuizUseCase, raw_subject: &str) -> QuizController {
        let observer = ConsoleObserver::new()
            .with_progress(self.show_progress)
            .with_views(false);
        let mut controller =
            QuizController::new(StalePolicy::Discard).with_observer(Arc::new(observer));

        controller.run(use_case, raw_subject).await;
        if self.reveal {
            match controller.reveal_all() {
                Ok(count) => debug!("Revealed {} answers", count),
                Err(e) => debug!("Nothing to reveal: {}", e),
            }
        }
        controller
    }

    /// The frame printed for a finished run
    pub fn frame(controller: &QuizController) -> String {
        ConsoleFormatter::format_final(&controller.view())
    }
}

impl Default for OneShot {
    fn default() -> Self {
        Self::new()
    }
}
