//! Chat REPL configuration from TOML (`[chat]` section)

use sakhi_domain::{Language, UnsupportedLanguage};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Language the chat starts in ("en" or "ta")
    pub default_language: String,
    /// Show a spinner while waiting for answers
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default().code().to_string(),
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileChatConfig {
    pub fn parse_language(&self) -> Result<Language, UnsupportedLanguage> {
        self.default_language.parse()
    }
}
