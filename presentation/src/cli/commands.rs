//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use sakhi_domain::{Language, list_topics};
use std::path::PathBuf;

/// Output format for answers and listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    #[default]
    Text,
    /// JSON, exactly as returned by the action
    Json,
}

/// CLI arguments for legal-sakhi
#[derive(Parser, Debug)]
#[command(name = "legal-sakhi")]
#[command(author, version, about = "Bilingual (English/Tamil) legal awareness assistant")]
#[command(long_about = r#"
Legal Sakhi answers everyday legal questions about Indian law in English or
Tamil. Pick a topic, ask a question, get a short answer in the language you
chose. Questions outside the six topics are declined.

This is an AI assistant for informational purposes only. Please consult a
licensed legal expert for professional advice.

Configuration files are loaded from (in priority order):
1. LEGAL_SAKHI_* environment variables
2. --config <path>         Explicit config file
3. ./legal-sakhi.toml      Project-level config
4. ~/.config/legal-sakhi/config.toml   Global config

Example:
  legal-sakhi topics
  legal-sakhi ask --topic "Road Safety Rules" "Can I ride bike without helmet?"
  legal-sakhi ask --topic 3 --language ta "பொருள் பழுதானால் பணம் திரும்ப பெற முடியுமா?"
  legal-sakhi chat --language ta
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the legal topics
    Topics,

    /// Ask one question and print the answer
    Ask {
        /// Topic name or its number from `topics`
        #[arg(short, long, value_name = "NAME|INDEX")]
        topic: String,

        /// Answer language (en or ta)
        #[arg(short, long)]
        language: Option<Language>,

        /// The question
        question: String,
    },

    /// Start an interactive chat
    Chat {
        /// Starting language (en or ta)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Show the effective configuration and where it came from
    Config,
}

/// Map a `--topic` argument to a topic name.
///
/// A 1-based index or a case-insensitive catalog name resolves to the
/// catalog's spelling; anything else is passed through unchanged.
pub fn resolve_topic_arg(arg: &str) -> String {
    let topics = list_topics();
    let trimmed = arg.trim();

    if let Ok(index) = trimmed.parse::<usize>()
        && let Some(topic) = index.checked_sub(1).and_then(|i| topics.get(i))
    {
        return topic.name.to_string();
    }

    topics
        .iter()
        .find(|topic| topic.name.eq_ignore_ascii_case(trimmed))
        .map(|topic| topic.name.to_string())
        .unwrap_or_else(|| arg.to_string())
}
