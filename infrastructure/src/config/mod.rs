//! Configuration file loading for legal-sakhi
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LEGAL_SAKHI_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./legal-sakhi.toml` or `./.legal-sakhi.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/legal-sakhi/config.toml`
//! 5. Fallback: `~/.config/legal-sakhi/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileChatConfig, FileConfig, FileEngineConfig,
    FileFlowConfig, FileLoggingConfig, FileScopeConfig, ProviderKind,
};
pub use loader::{ConfigLoader, ConfigSource, ENV_PREFIX};
