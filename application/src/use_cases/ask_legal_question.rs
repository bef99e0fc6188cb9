//! Ask Legal Question use case
//!
//! The caller-facing action: accepts an unvalidated record, validates it,
//! runs the QA flow and folds every outcome into an [`AnswerResult`].
//!
//! Callers only ever see one of three shapes:
//! - `{"answer": ...}` on success
//! - `{"error": "Invalid input."}` when validation fails
//! - `{"error": "An error occurred while fetching the AI response."}` for
//!   any failure past validation
//!
//! Failure details go to the operator log, never to the caller.

use crate::config::ScopePolicy;
use crate::ports::progress::{AnswerProgressNotifier, NoProgress};
use crate::use_cases::answer_question::AnswerQuestionUseCase;
use sakhi_domain::{AnswerResult, QuestionRequest, ValidationError, validate};
use serde_json::Value;
use tracing::{debug, error};

/// Use case for the validated, failure-folding QA action
#[derive(Clone)]
pub struct AskLegalQuestionUseCase {
    flow: AnswerQuestionUseCase,
    scope: ScopePolicy,
}

impl AskLegalQuestionUseCase {
    pub fn new(flow: AnswerQuestionUseCase) -> Self {
        Self {
            flow,
            scope: ScopePolicy::default(),
        }
    }

    /// Apply a topic scope policy at the request boundary.
    pub fn with_scope(mut self, scope: ScopePolicy) -> Self {
        self.scope = scope;
        self
    }

    /// Validate a raw record against the request rules and the scope policy.
    pub fn validate(&self, raw: &Value) -> Result<QuestionRequest, ValidationError> {
        let request = validate(raw)?;
        self.scope.check(&request)?;
        Ok(request)
    }

    /// Answer a raw request record.
    pub async fn execute(&self, raw: &Value) -> AnswerResult {
        self.execute_with_progress(raw, &NoProgress).await
    }

    /// Answer a raw request record with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        raw: &Value,
        progress: &dyn AnswerProgressNotifier,
    ) -> AnswerResult {
        match self.validate(raw) {
            Ok(request) => self.execute_request(&request, progress).await,
            Err(e) => {
                debug!(reason = e.failure().as_str(), "Rejected request: {}", e);
                AnswerResult::invalid_input()
            }
        }
    }

    /// Answer a request that is already validated.
    ///
    /// The scope policy is still applied so typed callers get the same
    /// treatment as raw ones.
    pub async fn execute_request(
        &self,
        request: &QuestionRequest,
        progress: &dyn AnswerProgressNotifier,
    ) -> AnswerResult {
        if let Err(e) = self.scope.check(request) {
            debug!(reason = e.failure().as_str(), "Rejected request: {}", e);
            return AnswerResult::invalid_input();
        }

        match self.flow.execute_with_progress(request, progress).await {
            Ok(output) => AnswerResult::answer(output.answer),
            Err(e) if e.is_invariant_violation() => {
                error!("AI Error: engine broke its output contract: {}", e);
                AnswerResult::engine_failure()
            }
            Err(e) => {
                error!("AI Error: {}", e);
                AnswerResult::engine_failure()
            }
        }
    }
}
