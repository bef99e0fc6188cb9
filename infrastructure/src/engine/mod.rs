//! Generation engine adapters
//!
//! HTTP implementations of the [`GenerationEngine`] port and the factory
//! that picks one from the `[engine]` configuration.

mod gemini;
mod http;
mod openai;

pub use gemini::GeminiEngine;
pub use openai::OpenAiEngine;

use crate::config::{FileEngineConfig, ProviderKind};
use sakhi_application::{EngineError, GenerationEngine};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the configured engine.
///
/// Gemini requires an API key; an OpenAI-compatible endpoint works without
/// one (local servers).
pub fn build_engine(
    config: &FileEngineConfig,
    timeout: Option<Duration>,
) -> Result<Arc<dyn GenerationEngine>, EngineError> {
    let kind = config
        .provider_kind()
        .map_err(EngineError::Configuration)?;
    let base_url = config.effective_base_url(kind);
    let api_key = config.resolve_api_key(kind);

    info!(provider = %kind, model = %config.model, base_url = %base_url, "Building engine");

    let engine: Arc<dyn GenerationEngine> = match kind {
        ProviderKind::Gemini => {
            let api_key = api_key.ok_or_else(|| {
                EngineError::Configuration(format!(
                    "No API key: set {} or engine.api_key",
                    config.effective_api_key_env(kind)
                ))
            })?;
            Arc::new(
                GeminiEngine::new(base_url, &config.model, api_key, timeout)?
                    .with_temperature(config.temperature),
            )
        }
        ProviderKind::OpenAi => Arc::new(
            OpenAiEngine::new(base_url, &config.model, api_key, timeout)?
                .with_temperature(config.temperature),
        ),
    };

    Ok(engine)
}
