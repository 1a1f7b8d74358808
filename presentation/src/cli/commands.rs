//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Question cards with reveal markers
    Cards,
    /// JSON report with the validated questions
    Json,
}

impl From<OutputFormat> for mcq_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Cards => mcq_domain::OutputFormat::Cards,
            OutputFormat::Json => mcq_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mcq-forge
#[derive(Parser, Debug)]
#[command(name = "mcq-forge")]
#[command(author, version, about = "Generate multiple-choice questions on any subject")]
#[command(long_about = r#"
mcq-forge asks a Gemini model for challenging multiple-choice questions
on a subject and shows them as question cards you can reveal one by one.

With a SUBJECT the quiz is generated once and printed. Without one an
interactive session starts: type a subject to generate, `:reveal <n>` to
show an answer, `:help` for more.

Configuration files are loaded from (in priority order):
1. MCQ_FORGE_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./mcq-forge.toml    Project-level config
4. ~/.config/mcq-forge/config.toml   Global config

The API key is read from $GEMINI_API_KEY unless configured otherwise.

Example:
  mcq-forge Photosynthesis
  mcq-forge --reveal -m gemini-2.5-pro "Organic chemistry"
  mcq-forge --fixture demo.json
"#)]
pub struct Cli {
    /// Subject to generate questions for (starts a session when omitted)
    #[arg(value_name = "SUBJECT")]
    pub subject: Vec<String>,

    /// Model to generate with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print every answer revealed (one-shot mode)
    #[arg(long)]
    pub reveal: bool,

    /// Serve model output from a JSON file instead of calling the API
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to a daily rolling file in DIR instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subject words joined back together, if any were given
    pub fn subject_text(&self) -> Option<String> {
        if self.subject.is_empty() {
            None
        } else {
            Some(self.subject.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subject_words_joined() {
        let cli = Cli::parse_from(["mcq-forge", "Organic", "chemistry"]);
        assert_eq!(cli.subject_text().as_deref(), Some("Organic chemistry"));
    }

    #[test]
    fn test_no_subject_starts_session() {
        let cli = Cli::parse_from(["mcq-forge", "-vv"]);
        assert!(cli.subject_text().is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_blank_subject_is_passed_through() {
        let cli = Cli::parse_from(["mcq-forge", "   "]);
        assert_eq!(cli.subject_text().as_deref(), Some("   "));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "mcq-forge",
            "-o",
            "json",
            "--reveal",
            "--fixture",
            "quiz.json",
            "-m",
            "gemini-2.5-pro",
            "Rust",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.reveal);
        assert_eq!(cli.fixture, Some(PathBuf::from("quiz.json")));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
    }
}
