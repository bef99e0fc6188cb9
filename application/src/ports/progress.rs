//! Progress notification port
//!
//! Lets a front end show that an answer is being generated.

use sakhi_domain::Language;

/// Callback for progress updates while a question is answered
///
/// Implementations live in the presentation layer.
pub trait AnswerProgressNotifier: Send + Sync {
    /// Called right before the engine is invoked
    fn on_engine_start(&self, topic: &str, language: Language);

    /// Called when the engine call has finished, successfully or not
    fn on_engine_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnswerProgressNotifier for NoProgress {
    fn on_engine_start(&self, _topic: &str, _language: Language) {}
    fn on_engine_complete(&self, _success: bool) {}
}
