//! Domain error types

use thiserror::Error;

/// Which structural rule a rejected request broke.
///
/// Kept for operator logs only. Callers always see the same
/// `Invalid input.` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The raw input was not an object
    NotAnObject,
    /// `topic` missing or not a string
    Topic,
    /// `question` missing or not a string
    Question,
    /// `question` is the empty string
    EmptyQuestion,
    /// `language` missing, not a string, or not `en`/`ta`
    Language,
    /// `topic` is not in the catalog (strict scope only)
    UnknownTopic,
}

impl ValidationFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFailure::NotAnObject => "input is not an object",
            ValidationFailure::Topic => "topic missing or not a string",
            ValidationFailure::Question => "question missing or not a string",
            ValidationFailure::EmptyQuestion => "question is empty",
            ValidationFailure::Language => "language missing or not one of en, ta",
            ValidationFailure::UnknownTopic => "topic is not in the catalog",
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request failed structural validation.
///
/// The display text is deliberately uniform; use [`ValidationError::failure`]
/// to find out which rule was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input.")]
pub struct ValidationError {
    failure: ValidationFailure,
}

impl ValidationError {
    pub fn new(failure: ValidationFailure) -> Self {
        Self { failure }
    }

    /// The rule that was broken
    pub fn failure(&self) -> ValidationFailure {
        self.failure
    }
}
