//! Google Gemini adapter
//!
//! Calls `generateContent` with JSON mode on and the output schema declared
//! as `responseSchema`, so the model replies with the answer object directly.

use super::http::{build_client, send_json};
use async_trait::async_trait;
use reqwest::Client;
use sakhi_application::{EngineError, GenerationEngine, GenerationRequest};
use sakhi_domain::parse_structured_reply;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

/// [`GenerationEngine`] backed by the Gemini REST API
pub struct GeminiEngine {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
    name: String,
}

impl GeminiEngine {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let model = model.into();
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            name: format!("gemini/{}", model),
            model,
            api_key: api_key.into(),
            temperature: None,
        })
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Request body for one generation.
    pub fn build_body(&self, request: &GenerationRequest) -> Value {
        let mut generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": to_gemini_schema(&request.output_schema),
        });
        if let Some(t) = self.temperature {
            generation_config["temperature"] = json!(t);
        }

        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.instruction }]
            }],
            "generationConfig": generation_config,
        })
    }
}

/// Gemini accepts an OpenAPI subset and rejects `additionalProperties`.
fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != "additionalProperties")
                .map(|(key, value)| (key.clone(), to_gemini_schema(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

/// Pull the structured output out of a `generateContent` response.
///
/// No candidate, or a candidate without text, is "no output".
pub fn parse_response(body: &Value) -> Result<Option<Value>, EngineError> {
    let Some(candidate) = body["candidates"].as_array().and_then(|c| c.first()) else {
        if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
            debug!(reason, "Gemini blocked the prompt");
        }
        return Ok(None);
    };

    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate["finishReason"].as_str() {
            debug!(reason, "Gemini candidate has no text");
        }
        return Ok(None);
    }

    parse_structured_reply(&text).map_err(|e| EngineError::MalformedResponse(e.to_string()))
}

#[async_trait]
impl GenerationEngine for GeminiEngine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, EngineError> {
        info!(
            model = %self.model,
            prompt = request.prompt_name,
            "Calling Gemini generateContent"
        );

        let http_request = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_body(request));

        let body = send_json(http_request).await?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::http::stub;
    use sakhi_domain::{AnswerOutput, Language, QuestionRequest};

    fn sample_request() -> GenerationRequest {
        let question =
            QuestionRequest::new("Road Safety Rules", "Can I ride bike without helmet?", Language::En)
                .unwrap();
        GenerationRequest {
            prompt_name: "topic_specific_answer",
            instruction: "Answer in en (English):".to_string(),
            input: question.to_input(),
            input_schema: QuestionRequest::input_schema(),
            output_schema: AnswerOutput::schema(),
        }
    }

    fn engine(base_url: &str) -> GeminiEngine {
        GeminiEngine::new(base_url, "gemini-2.0-flash", "test-key", None).unwrap()
    }

    #[test]
    fn test_body_declares_json_mode_and_schema() {
        let body = engine("https://example.invalid")
            .with_temperature(Some(0.5))
            .build_body(&sample_request());

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Answer in en (English):");
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["required"][0], "answer");
        assert!(config["responseSchema"].get("additionalProperties").is_none());
        assert_eq!(config["temperature"], 0.5);
    }

    #[test]
    fn test_parse_response_joins_text_parts() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"answer\": "}, {"text": "\"Yes.\"}"}]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(parse_response(&body).unwrap(), Some(json!({"answer": "Yes."})));
    }

    #[test]
    fn test_parse_response_without_candidates_is_none() {
        let blocked = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert_eq!(parse_response(&blocked).unwrap(), None);

        let empty = json!({"candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]});
        assert_eq!(parse_response(&empty).unwrap(), None);
    }

    #[test]
    fn test_parse_response_rejects_prose() {
        let body = json!({"candidates": [{"content": {"parts": [{"text": "I cannot help"}]}}]});
        assert!(matches!(
            parse_response(&body),
            Err(EngineError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_round_trip_against_stub() {
        let reply = json!({
            "candidates": [{"content": {"parts": [{"text": "{\"answer\": \"No, a helmet is mandatory.\"}"}]}}]
        });
        let (base_url, server) = stub::serve_once(200, reply.to_string()).await;

        let output = engine(&base_url).generate(&sample_request()).await.unwrap();

        assert_eq!(output, Some(json!({"answer": "No, a helmet is mandatory."})));
        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1beta/models/gemini-2.0-flash:generateContent"));
        assert!(raw.to_lowercase().contains("x-goog-api-key: test-key"));
        assert!(raw.contains("responseSchema"));
    }

    #[tokio::test]
    async fn test_generate_maps_auth_failure() {
        let (base_url, server) =
            stub::serve_once(403, json!({"error": {"message": "API key not valid"}}).to_string())
                .await;

        let err = engine(&base_url)
            .generate(&sample_request())
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::AuthFailed(b) if b.contains("API key not valid")));
        server.await.unwrap();
    }

    #[test]
    fn test_name_includes_model() {
        assert_eq!(engine("http://x").name(), "gemini/gemini-2.0-flash");
    }
}
