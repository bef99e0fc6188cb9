//! Infrastructure layer for legal-sakhi
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod engine;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileChatConfig, FileConfig,
    FileEngineConfig, FileLoggingConfig, ProviderKind,
};
pub use engine::{GeminiEngine, OpenAiEngine, build_engine};
pub use logging::JsonlConversationLogger;
