//! Language value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a language tag is not one of the supported codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: {0} (expected \"en\" or \"ta\")")]
pub struct UnsupportedLanguage(pub String);

/// Reply language for a question (Value Object)
///
/// Serialized as its two-letter tag. Parsing is exact: only `en` and `ta`
/// are accepted, no case folding, no full names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Tamil
    Ta,
}

impl Language {
    /// Two-letter tag sent to the engine
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    /// English name of the language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "Tamil",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "தமிழ்",
        }
    }

    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ta,
            Language::Ta => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ta" => Ok(Language::Ta),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}
