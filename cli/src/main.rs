//! CLI entrypoint for Legal Sakhi
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use sakhi_application::{
    AnswerProgressNotifier, AnswerQuestionUseCase, AskLegalQuestionUseCase, NoProgress,
};
use sakhi_domain::{Language, list_topics};
use sakhi_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, build_engine};
use sakhi_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, resolve_topic_arg,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Held until exit so buffered file logs are flushed
    let log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting Legal Sakhi");

    config.validate().context("Invalid configuration")?;

    let mut failed = false;

    match &cli.command {
        Command::Topics => {
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_topics(list_topics()),
                OutputFormat::Json => ConsoleFormatter::format_topics_json(list_topics()),
            };
            println!("{}", output);
        }
        Command::Config => print_config(&cli, &config)?,
        Command::Ask {
            topic,
            language,
            question,
        } => {
            let language = resolve_language(*language, &config)?;
            let action = build_action(&config)?;

            let raw = serde_json::json!({
                "topic": resolve_topic_arg(topic),
                "question": question,
                "language": language.code(),
            });

            let progress: Box<dyn AnswerProgressNotifier> =
                if cli.quiet || cli.output == OutputFormat::Json {
                    Box::new(NoProgress)
                } else {
                    Box::new(ProgressReporter::new())
                };
            let result = action.execute_with_progress(&raw, progress.as_ref()).await;

            match cli.output {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&result)),
                OutputFormat::Text if result.is_answer() => {
                    println!("{}", ConsoleFormatter::format_result(&result, language))
                }
                OutputFormat::Text => {
                    eprintln!("{}", ConsoleFormatter::format_result(&result, language))
                }
            }

            failed = !result.is_answer();
        }
        Command::Chat { language } => {
            let language = resolve_language(*language, &config)?;
            let action = build_action(&config)?;

            let mut repl = ChatRepl::new(action, language)
                .with_progress(!cli.quiet && config.chat.show_progress)
                .with_history_file(
                    config
                        .chat
                        .history_file
                        .as_deref()
                        .map(expand_home)
                        .or_else(ConfigLoader::default_history_path),
                );

            repl.run().await?;
        }
    }

    if failed {
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging based on verbosity level, plus an optional log file.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(level))
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let path = expand_home(log_file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("logging.file has no file name: {}", log_file))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}

/// Wire the engine, flow and action from configuration.
fn build_action(config: &FileConfig) -> Result<AskLegalQuestionUseCase> {
    let behavior = config.behavior.to_behavior();
    let engine = build_engine(&config.engine, behavior.timeout)?;
    let variant = config.flow.parse_prompt().map_err(anyhow::Error::msg)?;

    info!(engine = %engine.name(), prompt = variant.as_str(), "Engine ready");

    let mut flow = AnswerQuestionUseCase::new(engine)
        .with_prompt_variant(variant)
        .with_behavior(behavior);

    if let Some(path) = config.logging.conversation_log.as_deref() {
        match JsonlConversationLogger::new(expand_home(path)) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                flow = flow.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    Ok(AskLegalQuestionUseCase::new(flow).with_scope(config.scope.to_policy()))
}

fn resolve_language(flag: Option<Language>, config: &FileConfig) -> Result<Language> {
    match flag {
        Some(language) => Ok(language),
        None => Ok(config.chat.parse_language()?),
    }
}

fn print_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    let redacted = config.redacted();

    if cli.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&redacted)?);
        return Ok(());
    }

    println!("Configuration sources (in priority order):");
    if cli.no_config {
        println!("  [FOUND] Default: built-in defaults (--no-config)");
    } else {
        for source in ConfigLoader::sources(cli.config.as_ref()) {
            let mark = if source.found { "FOUND" } else { "     " };
            println!("  [{}] {:<8} {}", mark, format!("{}:", source.label), source.location);
        }
    }
    println!();
    print!("{}", redacted.to_toml()?);

    Ok(())
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
