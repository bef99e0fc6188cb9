//! Structured engine output

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The output shape the engine must conform its reply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutput {
    /// The answer to the user question, in the requested language
    pub answer: String,
}

impl AnswerOutput {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    /// JSON schema declared to the engine as the required output.
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "answer": {
                    "type": "string",
                    "description": "The answer to the user question in the requested language."
                }
            },
            "required": ["answer"],
            "additionalProperties": false
        })
    }

    /// Check a structured value against the output shape.
    ///
    /// Unknown extra fields are dropped; a missing or non-string `answer` is
    /// a conformance failure described by the returned message.
    pub fn from_value(value: Value) -> Result<Self, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}
