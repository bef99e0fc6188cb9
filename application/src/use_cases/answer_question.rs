//! Answer Question use case
//!
//! The prompt-bound QA flow: render the scope- and language-constrained
//! instruction, invoke the generation engine with declared input and output
//! schemas, and unwrap the structured reply.
//!
//! The flow is stateless. Each call is independent, so one instance can be
//! cloned and driven from many tasks at once.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generation_engine::{EngineError, GenerationEngine, GenerationRequest};
use crate::ports::progress::{AnswerProgressNotifier, NoProgress};
use sakhi_domain::util::truncate_str;
use sakhi_domain::{AnswerOutput, LegalPromptTemplate, PromptVariant, QuestionRequest};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while answering a question
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Engine call timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Engine output does not match the answer schema: {0}")]
    NonConformingOutput(String),

    #[error("Engine reported success but returned no output")]
    MissingOutput,

    #[error("Engine returned an empty answer")]
    EmptyAnswer,
}

impl AnswerQuestionError {
    /// The engine claimed success but broke the output contract.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            AnswerQuestionError::MissingOutput | AnswerQuestionError::EmptyAnswer
        )
    }
}

/// Use case for answering one validated question
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    engine: Arc<dyn GenerationEngine>,
    variant: PromptVariant,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerQuestionUseCase {
    pub fn new(engine: Arc<dyn GenerationEngine>) -> Self {
        Self {
            engine,
            variant: PromptVariant::default(),
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Choose the instruction template.
    pub fn with_prompt_variant(mut self, variant: PromptVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Apply behavior limits (engine timeout).
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Build the engine call for `request` without sending it.
    pub fn build_request(&self, request: &QuestionRequest) -> GenerationRequest {
        GenerationRequest {
            prompt_name: self.variant.prompt_name(),
            instruction: LegalPromptTemplate::render(self.variant, request),
            input: request.to_input(),
            input_schema: QuestionRequest::input_schema(),
            output_schema: AnswerOutput::schema(),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: &QuestionRequest,
    ) -> Result<AnswerOutput, AnswerQuestionError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: &QuestionRequest,
        progress: &dyn AnswerProgressNotifier,
    ) -> Result<AnswerOutput, AnswerQuestionError> {
        info!(
            topic = %request.topic(),
            language = %request.language(),
            engine = %self.engine.name(),
            "Answering question: {}",
            truncate_str(request.question(), 100)
        );

        let generation = self.build_request(request);
        debug!(
            prompt = generation.prompt_name,
            "Instruction is {} bytes",
            generation.instruction.len()
        );

        progress.on_engine_start(request.topic(), request.language());
        let outcome = self.invoke(&generation).await;
        progress.on_engine_complete(outcome.is_ok());

        match &outcome {
            Ok(output) => {
                info!("Answer received ({} bytes)", output.answer.len());
                self.conversation_logger.log(ConversationEvent::new(
                    "legal_answer",
                    serde_json::json!({
                        "engine": self.engine.name(),
                        "prompt": generation.prompt_name,
                        "topic": request.topic(),
                        "language": request.language().code(),
                        "question": request.question(),
                        "answer": output.answer,
                    }),
                ));
            }
            Err(e) => {
                warn!("Answer generation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "legal_answer_failed",
                    serde_json::json!({
                        "engine": self.engine.name(),
                        "prompt": generation.prompt_name,
                        "topic": request.topic(),
                        "language": request.language().code(),
                        "question": request.question(),
                        "error": e.to_string(),
                    }),
                ));
            }
        }

        outcome
    }

    async fn invoke(
        &self,
        generation: &GenerationRequest,
    ) -> Result<AnswerOutput, AnswerQuestionError> {
        let call = self.engine.generate(generation);
        let output = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| AnswerQuestionError::TimedOut(limit))??,
            None => call.await?,
        };

        let value = output.ok_or(AnswerQuestionError::MissingOutput)?;
        let answer =
            AnswerOutput::from_value(value).map_err(AnswerQuestionError::NonConformingOutput)?;

        if answer.answer.trim().is_empty() {
            return Err(AnswerQuestionError::EmptyAnswer);
        }

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::ConversationEvent;
    use async_trait::async_trait;
    use sakhi_domain::{Language, OUT_OF_SCOPE_REPLY};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    type Reply = Result<Option<Value>, EngineError>;

    struct MockEngine {
        replies: Mutex<VecDeque<Reply>>,
        requests: Mutex<Vec<GenerationRequest>>,
        delay: Option<Duration>,
    }

    impl MockEngine {
        fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                requests: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        fn answering(answer: &str) -> Self {
            Self::new(vec![Ok(Some(json!({ "answer": answer })))])
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationEngine for MockEngine {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, EngineError> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(EngineError::Other("No more replies".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl AnswerProgressNotifier for RecordingProgress {
        fn on_engine_start(&self, topic: &str, language: Language) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("start {topic} {language}"));
        }

        fn on_engine_complete(&self, success: bool) {
            self.calls.lock().unwrap().push(format!("complete {success}"));
        }
    }

    fn helmet_question() -> QuestionRequest {
        QuestionRequest::new("Road Safety Rules", "Can I ride bike without helmet?", Language::En)
            .unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_answer_is_unwrapped() {
        let engine = Arc::new(MockEngine::answering("No. A helmet is mandatory."));
        let use_case = AnswerQuestionUseCase::new(engine.clone());

        let output = use_case.execute(&helmet_question()).await.unwrap();

        assert_eq!(output.answer, "No. A helmet is mandatory.");
    }

    #[tokio::test]
    async fn test_engine_receives_instruction_and_schemas() {
        let engine = Arc::new(MockEngine::answering("No."));
        let use_case = AnswerQuestionUseCase::new(engine.clone());

        use_case.execute(&helmet_question()).await.unwrap();

        let requests = engine.requests();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.prompt_name, "topic_specific_answer");
        assert!(sent.instruction.contains("Road Safety Rules"));
        assert!(sent.instruction.contains("Can I ride bike without helmet?"));
        assert!(sent.instruction.contains("Answer in en"));
        assert!(sent.instruction.contains(OUT_OF_SCOPE_REPLY));
        assert_eq!(sent.input["language"], "en");
        assert_eq!(sent.input_schema, QuestionRequest::input_schema());
        assert_eq!(sent.output_schema, AnswerOutput::schema());
    }

    #[tokio::test]
    async fn test_bilingual_variant_is_used_when_configured() {
        let engine = Arc::new(MockEngine::answering("ஆம்."));
        let use_case =
            AnswerQuestionUseCase::new(engine.clone()).with_prompt_variant(PromptVariant::Bilingual);
        let request = QuestionRequest::new("Basic Labor Laws", "வேலை நேரம்?", Language::Ta).unwrap();

        use_case.execute(&request).await.unwrap();

        let sent = &engine.requests()[0];
        assert_eq!(sent.prompt_name, "bilingual_legal_question");
        assert!(sent.instruction.contains("Requested language: ta"));
    }

    #[tokio::test]
    async fn test_engine_error_is_returned() {
        let engine = Arc::new(MockEngine::new(vec![Err(EngineError::ConnectionError(
            "connection refused".to_string(),
        ))]));
        let use_case = AnswerQuestionUseCase::new(engine);

        let err = use_case.execute(&helmet_question()).await.unwrap_err();

        assert!(matches!(err, AnswerQuestionError::Engine(EngineError::ConnectionError(_))));
        assert!(!err.is_invariant_violation());
    }

    #[tokio::test]
    async fn test_missing_output_is_invariant_violation() {
        let engine = Arc::new(MockEngine::new(vec![Ok(None)]));
        let use_case = AnswerQuestionUseCase::new(engine);

        let err = use_case.execute(&helmet_question()).await.unwrap_err();

        assert!(matches!(err, AnswerQuestionError::MissingOutput));
        assert!(err.is_invariant_violation());
    }

    #[tokio::test]
    async fn test_blank_answer_is_invariant_violation() {
        let engine = Arc::new(MockEngine::answering("   "));
        let use_case = AnswerQuestionUseCase::new(engine);

        let err = use_case.execute(&helmet_question()).await.unwrap_err();

        assert!(matches!(err, AnswerQuestionError::EmptyAnswer));
        assert!(err.is_invariant_violation());
    }

    #[tokio::test]
    async fn test_non_conforming_output_is_rejected() {
        let engine = Arc::new(MockEngine::new(vec![Ok(Some(json!({"reply": "No."})))]));
        let use_case = AnswerQuestionUseCase::new(engine);

        let err = use_case.execute(&helmet_question()).await.unwrap_err();

        assert!(matches!(err, AnswerQuestionError::NonConformingOutput(_)));
        assert!(!err.is_invariant_violation());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_failure() {
        let engine = Arc::new(MockEngine::answering("late").with_delay(Duration::from_secs(120)));
        let use_case = AnswerQuestionUseCase::new(engine)
            .with_behavior(BehaviorConfig::with_timeout_seconds(5));

        let err = use_case.execute(&helmet_question()).await.unwrap_err();

        assert!(matches!(err, AnswerQuestionError::TimedOut(d) if d == Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_progress_brackets_engine_call() {
        let engine = Arc::new(MockEngine::new(vec![Ok(None)]));
        let use_case = AnswerQuestionUseCase::new(engine);
        let progress = RecordingProgress::default();

        let _ = use_case
            .execute_with_progress(&helmet_question(), &progress)
            .await;

        assert_eq!(
            *progress.calls.lock().unwrap(),
            vec!["start Road Safety Rules en".to_string(), "complete false".to_string()]
        );
    }

    #[tokio::test]
    async fn test_conversation_log_records_answer_and_failure() {
        let engine = Arc::new(MockEngine::new(vec![
            Ok(Some(json!({"answer": "No."}))),
            Err(EngineError::Timeout),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case =
            AnswerQuestionUseCase::new(engine).with_conversation_logger(logger.clone());

        use_case.execute(&helmet_question()).await.unwrap();
        use_case.execute(&helmet_question()).await.unwrap_err();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "legal_answer");
        assert_eq!(events[0].1["answer"], "No.");
        assert_eq!(events[0].1["topic"], "Road Safety Rules");
        assert_eq!(events[1].0, "legal_answer_failed");
        assert_eq!(events[1].1["error"], "Engine error: Timeout");
    }

    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let replies = (0..8)
            .map(|i| Ok(Some(json!({ "answer": format!("answer {i}") }))))
            .collect();
        let engine = Arc::new(MockEngine::new(replies));
        let use_case = AnswerQuestionUseCase::new(engine.clone());

        let mut join_set = tokio::task::JoinSet::new();
        for i in 0..8 {
            let use_case = use_case.clone();
            join_set.spawn(async move {
                let request =
                    QuestionRequest::new("Consumer Protection", format!("q{i}"), Language::En)
                        .unwrap();
                use_case.execute(&request).await
            });
        }

        let mut answers = Vec::new();
        while let Some(result) = join_set.join_next().await {
            answers.push(result.unwrap().unwrap().answer);
        }
        answers.sort();

        assert_eq!(answers.len(), 8);
        assert_eq!(answers[0], "answer 0");
        assert_eq!(engine.requests().len(), 8);
    }
}
