//! Request validation
//!
//! Turns an unstructured record into a [`QuestionRequest`] or a single,
//! uniform [`ValidationError`].

use super::question::QuestionRequest;
use crate::core::error::{ValidationError, ValidationFailure};
use crate::core::language::Language;
use serde_json::Value;

/// Validate a raw request record.
///
/// Rules:
/// - the record is an object (extra keys are ignored)
/// - `topic` is a string (any string, including one not in the catalog)
/// - `question` is a string of length ≥ 1 (whitespace counts)
/// - `language` is exactly `"en"` or `"ta"`
///
/// Values are returned unchanged on success.
pub fn validate(raw: &Value) -> Result<QuestionRequest, ValidationError> {
    let fail = |failure| ValidationError::new(failure);

    let record = raw
        .as_object()
        .ok_or_else(|| fail(ValidationFailure::NotAnObject))?;

    let topic = record
        .get("topic")
        .and_then(Value::as_str)
        .ok_or_else(|| fail(ValidationFailure::Topic))?;

    let question = record
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| fail(ValidationFailure::Question))?;

    let language: Language = record
        .get("language")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse().ok())
        .ok_or_else(|| fail(ValidationFailure::Language))?;

    QuestionRequest::new(topic, question, language)
}

impl TryFrom<&Value> for QuestionRequest {
    type Error = ValidationError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failure_of(raw: Value) -> ValidationFailure {
        validate(&raw).unwrap_err().failure()
    }

    #[test]
    fn test_valid_request_passes_through_unchanged() {
        let request = validate(&json!({
            "topic": "Road Safety Rules",
            "question": "Can I ride bike without helmet?",
            "language": "en",
        }))
        .unwrap();

        assert_eq!(request.topic(), "Road Safety Rules");
        assert_eq!(request.question(), "Can I ride bike without helmet?");
        assert_eq!(request.language(), Language::En);
    }

    #[test]
    fn test_empty_question_is_rejected_regardless_of_other_fields() {
        for raw in [
            json!({"topic": "Consumer Protection", "question": "", "language": "en"}),
            json!({"topic": "X", "question": "", "language": "ta"}),
            json!({"topic": "", "question": "", "language": "en"}),
        ] {
            assert_eq!(failure_of(raw), ValidationFailure::EmptyQuestion);
        }
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        for language in [json!("fr"), json!("EN"), json!("tamil"), json!(1), json!(null)] {
            let raw = json!({"topic": "X", "question": "test", "language": language});
            assert_eq!(failure_of(raw), ValidationFailure::Language);
        }
    }

    #[test]
    fn test_missing_or_mistyped_fields() {
        assert_eq!(
            failure_of(json!({"question": "q", "language": "en"})),
            ValidationFailure::Topic
        );
        assert_eq!(
            failure_of(json!({"topic": 3, "question": "q", "language": "en"})),
            ValidationFailure::Topic
        );
        assert_eq!(
            failure_of(json!({"topic": "t", "language": "en"})),
            ValidationFailure::Question
        );
        assert_eq!(
            failure_of(json!({"topic": "t", "question": ["q"], "language": "en"})),
            ValidationFailure::Question
        );
        assert_eq!(
            failure_of(json!({"topic": "t", "question": "q"})),
            ValidationFailure::Language
        );
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        for raw in [json!(null), json!("question"), json!([1, 2]), json!(42)] {
            assert_eq!(failure_of(raw), ValidationFailure::NotAnObject);
        }
    }

    #[test]
    fn test_whitespace_question_and_unknown_topic_are_accepted() {
        let request = validate(&json!({"topic": "X", "question": "   ", "language": "ta"})).unwrap();
        assert_eq!(request.question(), "   ");
        assert_eq!(request.topic(), "X");
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let raw = json!({"topic": "t", "question": "q", "language": "en", "session": 7});
        assert!(QuestionRequest::try_from(&raw).is_ok());
    }

    #[test]
    fn test_error_message_is_uniform() {
        let err = validate(&json!({"topic": "X", "question": "test", "language": "fr"})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input.");
    }
}
