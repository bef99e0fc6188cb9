//! Behavior, flow and scope configuration from TOML
//! (`[behavior]`, `[flow]` and `[scope]` sections)

use sakhi_application::{BehaviorConfig, ScopePolicy};
use sakhi_domain::PromptVariant;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Timeout in seconds for engine calls (always applied, must be > 0)
    pub timeout_seconds: u64,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 60,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior(&self) -> BehaviorConfig {
        BehaviorConfig::with_timeout_seconds(self.timeout_seconds)
    }
}

/// Raw QA flow configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFlowConfig {
    /// Instruction template ("topic_specific" or "bilingual")
    pub prompt: String,
}

impl Default for FileFlowConfig {
    fn default() -> Self {
        Self {
            prompt: PromptVariant::default().as_str().to_string(),
        }
    }
}

impl FileFlowConfig {
    pub fn parse_prompt(&self) -> Result<PromptVariant, String> {
        self.prompt.parse()
    }
}

/// Raw topic scope configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScopeConfig {
    /// Reject topics that are not in the catalog
    pub strict_topics: bool,
}

impl FileScopeConfig {
    pub fn to_policy(&self) -> ScopePolicy {
        ScopePolicy {
            strict_topics: self.strict_topics,
        }
    }
}
