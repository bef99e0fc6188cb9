//! Prompt domain
//!
//! The instruction text that carries the assistant's scope and language policy.

mod template;

pub use template::{EXPERT_REFERRAL, LegalPromptTemplate, OUT_OF_SCOPE_REPLY, PromptVariant};
