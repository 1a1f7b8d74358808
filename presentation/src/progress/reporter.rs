//! Console observer: spinner while loading, redraw on every transition

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use mcq_application::StateObserver;
use mcq_domain::{UiState, render};
use std::sync::Mutex;
use std::time::Duration;

/// Draws each [`UiState`] to stdout
///
/// While `Loading`, a spinner replaces the output; on any other state the
/// spinner is cleared and the rendered view is printed.
pub struct ConsoleObserver {
    spinner: Mutex<Option<ProgressBar>>,
    show_progress: bool,
    print_views: bool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_progress: true,
            print_views: true,
        }
    }

    /// Set whether to show the loading spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether rendered views are printed (off for JSON output)
    pub fn with_views(mut self, print: bool) -> Self {
        self.print_views = print;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObserver for ConsoleObserver {
    fn on_transition(&self, state: &UiState) {
        if let UiState::Loading { subject, .. } = state {
            if self.show_progress {
                self.start_spinner(format!("Generating questions on \"{}\"...", subject));
            }
            return;
        }

        self.stop_spinner();
        if self.print_views {
            let output = ConsoleFormatter::format(&render(state));
            if !output.is_empty() {
                println!("{}", output);
            }
        }
    }
}
