//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostics to this file
    pub file: Option<String>,
    /// Write the Q&A transcript as JSONL to this file
    pub conversation_log: Option<String>,
}
