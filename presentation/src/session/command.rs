//! Input line parsing for the interactive session

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Anything that is not a `:` command, blank lines included
    Submit(String),
    /// Reveal a card by 1-based number
    Reveal(usize),
    RevealAll,
    /// Redraw the current screen
    Show,
    Help,
    Quit,
    Invalid(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return SessionCommand::Submit(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        match (name, arg) {
            ("q" | "quit" | "exit", None) => SessionCommand::Quit,
            ("h" | "help" | "?", None) => SessionCommand::Help,
            ("s" | "show", None) => SessionCommand::Show,
            ("ra", None) | ("r" | "reveal", Some("all")) => SessionCommand::RevealAll,
            ("r" | "reveal", Some(n)) => match n.parse::<usize>() {
                Ok(number) if number >= 1 => SessionCommand::Reveal(number),
                _ => SessionCommand::Invalid(format!("Not a question number: {}", n)),
            },
            ("r" | "reveal", None) => {
                SessionCommand::Invalid("Usage: :reveal <number> | :reveal all".to_string())
            }
            _ => SessionCommand::Invalid(format!("Unknown command: {}", trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_submits() {
        assert_eq!(
            SessionCommand::parse("Photosynthesis"),
            SessionCommand::Submit("Photosynthesis".to_string())
        );
    }

    #[test]
    fn test_blank_line_submits() {
        assert_eq!(
            SessionCommand::parse("   "),
            SessionCommand::Submit("   ".to_string())
        );
    }

    #[test]
    fn test_reveal_commands() {
        assert_eq!(SessionCommand::parse(":reveal 3"), SessionCommand::Reveal(3));
        assert_eq!(SessionCommand::parse(" :r 1 "), SessionCommand::Reveal(1));
        assert_eq!(SessionCommand::parse(":reveal all"), SessionCommand::RevealAll);
        assert_eq!(SessionCommand::parse(":ra"), SessionCommand::RevealAll);
    }

    #[test]
    fn test_invalid_reveal_numbers() {
        assert!(matches!(SessionCommand::parse(":reveal 0"), SessionCommand::Invalid(_)));
        assert!(matches!(SessionCommand::parse(":reveal two"), SessionCommand::Invalid(_)));
        assert!(matches!(SessionCommand::parse(":reveal"), SessionCommand::Invalid(_)));
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(SessionCommand::parse(":q"), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(":exit"), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(":help"), SessionCommand::Help);
        assert_eq!(SessionCommand::parse(":show"), SessionCommand::Show);
        assert!(matches!(SessionCommand::parse(":frobnicate"), SessionCommand::Invalid(_)));
    }
}
