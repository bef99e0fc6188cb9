//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording each answered (or
//! failed) question to a machine-readable transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! diagnostics for operators, this port carries the Q&A transcript.

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "legal_answer", "legal_answer_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible: a transcript write failure must not
/// turn a good answer into an error.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
