//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enumerated values stay strings here and are parsed (and validated) on use,
//! so a typo surfaces as a [`ConfigValidationError`] instead of a figment
//! extraction failure.

mod behavior;
mod chat;
mod engine;
mod logging;

pub use behavior::{FileBehaviorConfig, FileFlowConfig, FileScopeConfig};
pub use chat::FileChatConfig;
pub use engine::{FileEngineConfig, ProviderKind};
pub use logging::FileLoggingConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("engine.model cannot be empty")]
    EmptyModelName,

    #[error("behavior.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("engine.provider: unknown value '{0}' (expected one of: gemini, openai)")]
    UnknownProvider(String),

    #[error("flow.prompt: unknown value '{0}' (expected one of: topic_specific, bilingual)")]
    UnknownPromptVariant(String),

    #[error("chat.default_language: unsupported value '{0}' (expected \"en\" or \"ta\")")]
    InvalidLanguage(String),

    #[error("engine.temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation engine settings
    pub engine: FileEngineConfig,
    /// Engine call limits
    pub behavior: FileBehaviorConfig,
    /// QA flow settings
    pub flow: FileFlowConfig,
    /// Topic scope enforcement
    pub scope: FileScopeConfig,
    /// Interactive chat settings
    pub chat: FileChatConfig,
    /// Diagnostic and transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration values, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.engine.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.engine.provider_kind().is_err() {
            return Err(ConfigValidationError::UnknownProvider(
                self.engine.provider.clone(),
            ));
        }

        if let Some(t) = self.engine.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(ConfigValidationError::InvalidTemperature(t));
        }

        if self.behavior.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.flow.parse_prompt().is_err() {
            return Err(ConfigValidationError::UnknownPromptVariant(
                self.flow.prompt.clone(),
            ));
        }

        if self.chat.parse_language().is_err() {
            return Err(ConfigValidationError::InvalidLanguage(
                self.chat.default_language.clone(),
            ));
        }

        Ok(())
    }

    /// A copy safe to print: a direct API key is masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.engine.api_key.is_some() {
            config.engine.api_key = Some("<redacted>".to_string());
        }
        config
    }

    /// Render as TOML (for the `config` command).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
