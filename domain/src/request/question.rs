//! Question request value object

use crate::core::error::{ValidationError, ValidationFailure};
use crate::core::language::Language;
use serde::Serialize;
use serde_json::{Value, json};

/// A validated question for one QA interaction (Value Object)
///
/// Holds the values exactly as submitted: no trimming, no normalization.
/// The topic is an opaque string; catalog membership is a separate policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRequest {
    topic: String,
    question: String,
    language: Language,
}

impl QuestionRequest {
    /// Create a request, rejecting an empty question.
    pub fn new(
        topic: impl Into<String>,
        question: impl Into<String>,
        language: Language,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.is_empty() {
            return Err(ValidationError::new(ValidationFailure::EmptyQuestion));
        }
        Ok(Self {
            topic: topic.into(),
            question,
            language,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The structured input forwarded to the engine alongside the instruction.
    pub fn to_input(&self) -> Value {
        json!({
            "topic": self.topic,
            "question": self.question,
            "language": self.language.code(),
        })
    }

    /// JSON schema of [`QuestionRequest::to_input`].
    pub fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The specific legal topic selected by the user."
                },
                "question": {
                    "type": "string",
                    "description": "The user question related to the selected legal topic."
                },
                "language": {
                    "type": "string",
                    "enum": ["en", "ta"],
                    "description": "The language to answer in (en for English, ta for Tamil)."
                }
            },
            "required": ["topic", "question", "language"]
        })
    }
}
