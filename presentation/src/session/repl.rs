//! Event loop for the interactive quiz session
//!
//! Reads lines and generation results in one `select!` loop, so input is
//! still handled while a request is in flight. Each accepted submission
//! runs on its own task and reports back with its [`Submission`] ticket;
//! the controller decides whether a late result is applied.

use super::command::SessionCommand;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use mcq_application::{GenerateQuizUseCase, QuizController, QuizError, Submission};
use mcq_domain::{QuestionSet, RevealOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

type Outcome = (Submission, Result<QuestionSet, QuizError>);

/// Interactive quiz REPL
pub struct QuizRepl {
    use_case: GenerateQuizUseCase,
    controller: QuizController,
    show_welcome: bool,
}

impl QuizRepl {
    pub fn new(use_case: GenerateQuizUseCase, controller: QuizController) -> Self {
        Self {
            use_case,
            controller,
            show_welcome: true,
        }
    }

    /// Set whether to print the welcome banner
    pub fn with_welcome(mut self, show: bool) -> Self {
        self.show_welcome = show;
        self
    }

    /// Run on stdin until `:quit` or end of input
    pub async fn run(self) -> std::io::Result<QuizController> {
        self.run_with_input(BufReader::new(tokio::io::stdin())).await
    }

    /// Run on any line source
    ///
    /// At end of input the loop keeps going until every outstanding request
    /// has settled; `:quit` returns immediately.
    pub async fn run_with_input<R>(mut self, input: R) -> std::io::Result<QuizController>
    where
        R: AsyncBufRead + Unpin,
    {
        if self.show_welcome {
            self.print_welcome();
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
        let mut lines = input.lines();
        let mut input_open = true;
        let mut pending = 0usize;

        loop {
            if !input_open && pending == 0 {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        debug!("End of input with {} pending request(s)", pending);
                        input_open = false;
                        continue;
                    };
                    match SessionCommand::parse(&line) {
                        SessionCommand::Quit => {
                            println!("Bye!");
                            break;
                        }
                        SessionCommand::Submit(raw) => {
                            if self.submit(&raw, &tx) {
                                pending += 1;
                            }
                        }
                        command => self.handle_command(command),
                    }
                }
                Some((submission, outcome)) = rx.recv() => {
                    pending = pending.saturating_sub(1);
                    self.controller.settle(submission, outcome);
                }
            }
        }

        Ok(self.controller)
    }

    /// Returns true if a request was issued
    fn submit(&mut self, raw: &str, tx: &mpsc::UnboundedSender<Outcome>) -> bool {
        let Some(submission) = self.controller.submit(raw) else {
            return false;
        };

        let use_case = self.use_case.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = use_case.generate(&submission.subject).await;
            if tx.send((submission, outcome)).is_err() {
                debug!("Session ended before the result arrived");
            }
        });
        true
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Reveal(number) => match self.controller.reveal(number - 1) {
                Ok(RevealOutcome::Revealed) => {}
                Ok(RevealOutcome::AlreadyRevealed) => {
                    println!("{}", format!("Question {} is already revealed.", number).dimmed());
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            SessionCommand::RevealAll => match self.controller.reveal_all() {
                Ok(0) => println!("{}", "All answers are already revealed.".dimmed()),
                Ok(_) => {}
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            SessionCommand::Show => {
                let output = ConsoleFormatter::format(&self.controller.view());
                if output.is_empty() {
                    println!("{}", "Nothing to show yet.".dimmed());
                } else {
                    println!("{}", output);
                }
            }
            SessionCommand::Help => self.print_help(),
            SessionCommand::Invalid(message) => {
                warn!("{}", message);
                println!("{}", message.yellow());
                println!("Type :help for available commands");
            }
            SessionCommand::Submit(_) | SessionCommand::Quit => {}
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          MCQ Forge - Quiz Session           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!("Type a subject and press Enter to generate questions.");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  <subject>            - Generate questions on a subject");
        println!("  :reveal <n>, :r <n>  - Show the answer to question n");
        println!("  :reveal all, :ra     - Show every answer");
        println!("  :show, :s            - Redraw the current screen");
        println!("  :help, :h            - Show this help");
        println!("  :quit, :q            - Exit");
        println!();
    }
}
