//! Console output formatter for quiz views

use colored::Colorize;
use mcq_domain::{CardView, OptionMark, OptionView, View, ViewBody};

/// Formats rendered views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a frame for the interactive session, with `:reveal` hints on
    /// hidden cards. Loading and idle frames have no body text.
    pub fn format(view: &View) -> String {
        Self::format_frame(view, true)
    }

    /// Format a frame that is printed once, outside the session
    pub fn format_final(view: &View) -> String {
        Self::format_frame(view, false)
    }

    fn format_frame(view: &View, reveal_hints: bool) -> String {
        match &view.body {
            ViewBody::Empty => String::new(),
            ViewBody::Error(message) => Self::error_banner(message),
            ViewBody::Cards(cards) => {
                let mut output = String::new();
                output.push_str(&Self::header(&Self::question_count(cards.len())));
                output.push('\n');
                for (index, card) in cards.iter().enumerate() {
                    output.push('\n');
                    output.push_str(&Self::format_card(index, card, reveal_hints));
                }
                output.push_str(&Self::footer());
                output
            }
        }
    }

    /// Format one question card
    pub fn format_card(index: usize, card: &CardView, reveal_hint: bool) -> String {
        let mut output = format!("{}\n", card.heading.bold());

        for (i, option) in card.options.iter().enumerate() {
            output.push_str(&Self::format_option(i, option));
            output.push('\n');
        }

        if card.reveal_control && reveal_hint {
            output.push_str(&format!(
                "  {}\n",
                format!("[Show Answer: :reveal {}]", index + 1).dimmed()
            ));
        }
        output
    }

    fn question_count(count: usize) -> String {
        match count {
            1 => "1 question".to_string(),
            n => format!("{} questions", n),
        }
    }

    fn format_option(index: usize, option: &OptionView) -> String {
        let label = Self::option_label(index);
        match option.mark {
            None => format!("  {}. {}", label, option.text),
            Some(OptionMark::Correct) => format!(
                "  {} {}",
                "✓".green().bold(),
                format!("{}. {}", label, option.text).green().bold()
            ),
            Some(OptionMark::Incorrect) => format!(
                "  {} {}",
                "✗".red(),
                format!("{}. {}", label, option.text).red().dimmed()
            ),
        }
    }

    /// `A`, `B`, `C`, ... for option positions
    pub fn option_label(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }

    pub fn error_banner(message: &str) -> String {
        format!("{} {}\n", "✗".red().bold(), message.red())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(marks: Option<[OptionMark; 4]>) -> CardView {
        let texts = ["London", "Paris", "Berlin", "Madrid"];
        CardView {
            heading: "Q1: What is the capital of France?".to_string(),
            options: texts
                .iter()
                .enumerate()
                .map(|(i, t)| OptionView {
                    text: t.to_string(),
                    mark: marks.map(|m| m[i]),
                })
                .collect(),
            reveal_control: marks.is_none(),
        }
    }

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_hidden_card_shows_reveal_hint() {
        let output = plain(|| ConsoleFormatter::format_card(0, &card(None), true));
        assert!(output.contains("Q1: What is the capital of France?"));
        assert!(output.contains("  A. London"));
        assert!(output.contains("  D. Madrid"));
        assert!(output.contains("[Show Answer: :reveal 1]"));
    }

    #[test]
    fn test_revealed_card_marks_options() {
        use OptionMark::*;
        let output = plain(|| {
            ConsoleFormatter::format_card(
                0,
                &card(Some([Incorrect, Correct, Incorrect, Incorrect])),
                true,
            )
        });
        assert!(output.contains("✓ B. Paris"));
        assert!(output.contains("✗ A. London"));
        assert_eq!(output.matches('✓').count(), 1);
        assert_eq!(output.matches('✗').count(), 3);
        assert!(!output.contains("Show Answer"));
    }

    #[test]
    fn test_final_frame_has_no_reveal_hint() {
        let view = View {
            submit_enabled: true,
            loading: false,
            body: ViewBody::Cards(vec![card(None)]),
        };
        let output = plain(|| ConsoleFormatter::format_final(&view));
        assert!(output.contains("Q1: What is the capital of France?"));
        assert!(!output.contains("Show Answer"));
        assert!(plain(|| ConsoleFormatter::format(&view)).contains("[Show Answer: :reveal 1]"));
    }

    #[test]
    fn test_question_count_is_pluralized() {
        let one = View {
            submit_enabled: true,
            loading: false,
            body: ViewBody::Cards(vec![card(None)]),
        };
        let output = plain(|| ConsoleFormatter::format(&one));
        assert!(output.contains("1 question"));
        assert!(!output.contains("1 questions"));

        let two = View {
            body: ViewBody::Cards(vec![card(None), card(None)]),
            ..one
        };
        assert!(plain(|| ConsoleFormatter::format(&two)).contains("2 questions"));
    }

    #[test]
    fn test_empty_view_prints_nothing() {
        let view = View {
            submit_enabled: false,
            loading: true,
            body: ViewBody::Empty,
        };
        assert!(ConsoleFormatter::format(&view).is_empty());
    }

    #[test]
    fn test_error_view() {
        let view = View {
            submit_enabled: true,
            loading: false,
            body: ViewBody::Error("Please enter a subject.".to_string()),
        };
        let output = plain(|| ConsoleFormatter::format(&view));
        assert_eq!(output, "✗ Please enter a subject.\n");
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(ConsoleFormatter::option_label(0), 'A');
        assert_eq!(ConsoleFormatter::option_label(3), 'D');
    }
}
