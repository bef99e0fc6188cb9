//! Domain layer for legal-sakhi
//!
//! This crate contains the topic catalog, request and answer value objects,
//! the request validator, the instruction templates and engine reply parsing.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Topic**: one of six fixed legal subject areas ([`list_topics`])
//! - **QuestionRequest**: a validated `(topic, question, language)` triple
//! - **AnswerResult**: exactly one of `{answer}` or `{error}`
//!
//! Scope enforcement is carried by the instruction text in [`prompt`], not by
//! code: the engine is told what it may answer.

pub mod answer;
pub mod core;
pub mod prompt;
pub mod request;
pub mod topic;
pub mod util;

// Re-export commonly used types
pub use answer::{
    AnswerOutput, AnswerResult, ENGINE_FAILURE_MESSAGE, INVALID_INPUT_MESSAGE, ReplyParseError,
    extract_json_object, parse_structured_reply,
};
pub use crate::core::{
    error::{ValidationError, ValidationFailure},
    language::{Language, UnsupportedLanguage},
};
pub use prompt::{EXPERT_REFERRAL, LegalPromptTemplate, OUT_OF_SCOPE_REPLY, PromptVariant};
pub use request::{QuestionRequest, validate};
pub use topic::{Topic, find_topic, is_known_topic, list_topics};
