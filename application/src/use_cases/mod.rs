//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod ask_legal_question;
