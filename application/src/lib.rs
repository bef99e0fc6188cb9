//! Application layer for legal-sakhi
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ScopePolicy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    generation_engine::{EngineError, GenerationEngine, GenerationRequest},
    progress::{AnswerProgressNotifier, NoProgress},
};
pub use use_cases::answer_question::{AnswerQuestionError, AnswerQuestionUseCase};
pub use use_cases::ask_legal_question::AskLegalQuestionUseCase;
