//! CLI entrypoint for mcq-forge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use mcq_application::{GenerateQuizUseCase, QuizController, StructuredGenerator};
use mcq_domain::{Model, OutputFormat, UiState};
use mcq_infrastructure::{
    ConfigLoader, FileConfig, FixtureGenerator, GeminiGenerator, GeminiSettings,
};
use mcq_presentation::{Cli, ConsoleObserver, OneShot, QuizReport, QuizRepl};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_guard = init_logging(&cli)?;

    info!("Starting mcq-forge");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let model = match &cli.model {
        Some(name) => {
            let Ok(model) = name.parse::<Model>();
            model
        }
        None => config.gemini.parse_model(),
    };
    let generator: Arc<dyn StructuredGenerator> = match &cli.fixture {
        Some(path) => {
            info!("Serving model output from {}", path.display());
            Arc::new(FixtureGenerator::new(path.clone()))
        }
        None => {
            let settings = GeminiSettings::from_config(&config.gemini)?;
            Arc::new(GeminiGenerator::new(settings)?)
        }
    };
    let use_case = GenerateQuizUseCase::new(generator, model);
    let (policy, _) = config.session.parse_stale_policy();

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Interactive session
    let Some(subject) = cli.subject_text() else {
        let observer = ConsoleObserver::new().with_progress(!cli.quiet);
        let controller = QuizController::new(policy).with_observer(Arc::new(observer));
        QuizRepl::new(use_case, controller).run().await?;
        return Ok(());
    };

    // One-shot mode
    let controller = OneShot::new()
        .with_progress(!cli.quiet)
        .with_reveal(cli.reveal)
        .run(&use_case, &subject)
        .await;

    if format == OutputFormat::Cards {
        println!("{}", OneShot::frame(&controller));
    }

    match controller.state() {
        UiState::Success(board) => {
            if format == OutputFormat::Json {
                println!("{}", QuizReport::from_board(board, use_case.model()).to_json());
            }
            Ok(())
        }
        UiState::Error(message) => {
            if format == OutputFormat::Json {
                eprintln!("{}", message);
            }
            drop(log_guard);
            std::process::exit(1);
        }
        other => bail!("Generation ended in unexpected state: {}", other.name()),
    }
}

/// Set up tracing to stderr, or to a daily log file with `--log-file`
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    if let Some(dir) = &cli.log_file {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "mcq-forge.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue.message);
        } else {
            warn!("Config: {}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration, see the errors above");
    }
    Ok(config)
}
