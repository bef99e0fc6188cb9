//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BehaviorConfig`]: limits on the engine call
//! - [`ScopePolicy`]: whether topics must come from the catalog

use sakhi_domain::{QuestionRequest, ValidationError, ValidationFailure, is_known_topic};
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for engine calls.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the engine before the call counts as failed.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }
}

/// Topic scope enforcement at the request boundary.
///
/// By default any topic string is forwarded and the instruction text alone
/// keeps the engine in scope. `strict_topics` turns that into a hard check
/// against the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopePolicy {
    pub strict_topics: bool,
}

impl ScopePolicy {
    pub fn strict() -> Self {
        Self {
            strict_topics: true,
        }
    }

    /// Reject a request whose topic is outside the catalog, when strict.
    pub fn check(&self, request: &QuestionRequest) -> Result<(), ValidationError> {
        if self.strict_topics && !is_known_topic(request.topic()) {
            return Err(ValidationError::new(ValidationFailure::UnknownTopic));
        }
        Ok(())
    }
}
