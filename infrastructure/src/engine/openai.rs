//! OpenAI-compatible chat completions adapter
//!
//! Works with the OpenAI API and with local servers that speak the same
//! protocol (Ollama, vLLM). Structured output is requested through
//! `response_format: json_schema`.

use super::http::{build_client, send_json};
use async_trait::async_trait;
use reqwest::Client;
use sakhi_application::{EngineError, GenerationEngine, GenerationRequest};
use sakhi_domain::parse_structured_reply;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

/// [`GenerationEngine`] backed by a `/v1/chat/completions` endpoint
pub struct OpenAiEngine {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    temperature: Option<f32>,
    name: String,
}

impl OpenAiEngine {
    /// `api_key` may be `None` for local servers that do not check it.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let model = model.into();
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            name: format!("openai/{}", model),
            model,
            api_key,
            temperature: None,
        })
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Request body for one generation.
    pub fn build_body(&self, request: &GenerationRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": request.instruction }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.prompt_name,
                    "strict": true,
                    "schema": request.output_schema,
                }
            },
        });
        if let Some(t) = self.temperature {
            body["temperature"] = json!(t);
        }
        body
    }
}

/// Pull the structured output out of a chat completion.
///
/// A missing choice or a null/empty `content` (e.g. a refusal) is "no output".
pub fn parse_response(body: &Value) -> Result<Option<Value>, EngineError> {
    let Some(choice) = body["choices"].as_array().and_then(|c| c.first()) else {
        return Ok(None);
    };

    match choice["message"]["content"].as_str() {
        Some(text) if !text.trim().is_empty() => parse_structured_reply(text)
            .map_err(|e| EngineError::MalformedResponse(e.to_string())),
        _ => Ok(None),
    }
}

#[async_trait]
impl GenerationEngine for OpenAiEngine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, EngineError> {
        info!(
            model = %self.model,
            prompt = request.prompt_name,
            "Calling chat completions"
        );

        let mut http_request = self.client.post(self.endpoint());
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let body = send_json(http_request.json(&self.build_body(request))).await?;
        parse_response(&body)
    }
}
