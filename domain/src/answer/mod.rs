//! Answers: the engine output shape, reply parsing and the caller-facing result.

mod output;
mod parsing;
mod result;

pub use output::AnswerOutput;
pub use parsing::{ReplyParseError, extract_json_object, parse_structured_reply};
pub use result::{AnswerResult, ENGINE_FAILURE_MESSAGE, INVALID_INPUT_MESSAGE};
