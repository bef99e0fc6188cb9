//! Caller-facing answer result

use serde::{Deserialize, Serialize};

/// Message returned for any request that fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// Message returned for any failure while generating the answer.
pub const ENGINE_FAILURE_MESSAGE: &str = "An error occurred while fetching the AI response.";

/// Outcome of one QA interaction (Value Object)
///
/// Serializes as `{"answer": "..."}` or `{"error": "..."}`, never both,
/// never neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerResult {
    Answer { answer: String },
    Error { error: String },
}

impl AnswerResult {
    pub fn answer(answer: impl Into<String>) -> Self {
        AnswerResult::Answer {
            answer: answer.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        AnswerResult::Error {
            error: error.into(),
        }
    }

    /// The result for a request rejected by validation
    pub fn invalid_input() -> Self {
        Self::error(INVALID_INPUT_MESSAGE)
    }

    /// The result for a request whose answer could not be generated
    pub fn engine_failure() -> Self {
        Self::error(ENGINE_FAILURE_MESSAGE)
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, AnswerResult::Answer { .. })
    }

    pub fn answer_text(&self) -> Option<&str> {
        match self {
            AnswerResult::Answer { answer } => Some(answer),
            AnswerResult::Error { .. } => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            AnswerResult::Answer { .. } => None,
            AnswerResult::Error { error } => Some(error),
        }
    }
}
