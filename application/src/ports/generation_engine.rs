//! Generation engine port
//!
//! Defines the interface for the external answer-generation service: given an
//! instruction, a structured input and a target output schema, produce a
//! structured output or fail.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while invoking the engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One structured generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Template name, for logs and engines that track prompts
    pub prompt_name: &'static str,
    /// Fully rendered instruction text
    pub instruction: String,
    /// Structured input the instruction was rendered from
    pub input: Value,
    /// JSON schema of `input`
    pub input_schema: Value,
    /// JSON schema the output must conform to
    pub output_schema: Value,
}

/// Gateway to the external generation engine
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationEngine: Send + Sync {
    /// Identifier for logs, e.g. `gemini/gemini-2.0-flash`
    fn name(&self) -> &str;

    /// Run one generation.
    ///
    /// `Ok(None)` means the call succeeded but produced no output. Shape
    /// checking against `output_schema` is left to the caller.
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, EngineError>;
}
