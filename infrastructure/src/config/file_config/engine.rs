//! Engine configuration from TOML (`[engine]` section)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub const NAMES: [&'static str; 2] = ["gemini", "openai"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com",
            ProviderKind::OpenAi => "https://api.openai.com",
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" | "googleai" => Ok(ProviderKind::Gemini),
            "openai" | "openai-compatible" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Raw engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Provider name ("gemini" or "openai")
    pub provider: String,
    /// Model identifier passed to the provider
    pub model: String,
    /// Override for the provider base URL
    pub base_url: Option<String>,
    /// Environment variable holding the API key (provider default when unset)
    pub api_key_env: Option<String>,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Sampling temperature, 0.0 to 2.0
    pub temperature: Option<f32>,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
            base_url: None,
            api_key_env: None,
            api_key: None,
            temperature: None,
        }
    }
}

impl FileEngineConfig {
    pub fn provider_kind(&self) -> Result<ProviderKind, String> {
        self.provider.parse()
    }

    /// Base URL with any trailing slash removed.
    pub fn effective_base_url(&self, kind: ProviderKind) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(kind.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn effective_api_key_env(&self, kind: ProviderKind) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| kind.default_api_key_env().to_string())
    }

    /// Resolve the API key: direct value first, then the environment.
    pub fn resolve_api_key(&self, kind: ProviderKind) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Some(key.clone());
        }
        std::env::var(self.effective_api_key_env(kind))
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}
