//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface: choose a topic,
//! read its greeting and examples, ask questions.

mod repl;

pub use repl::{ChatAction, ChatRepl, ChatSession};
