//! Engine reply parsing.
//!
//! Engines asked for JSON do not always return bare JSON: some wrap it in a
//! markdown fence, some add a sentence before it. These functions pull the
//! structured object out of the reply text. Pure text handling, no I/O.

use serde_json::Value;
use thiserror::Error;

/// The reply text could not be read as a structured object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyParseError {
    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("reply JSON is invalid: {0}")]
    InvalidJson(String),
}

/// Locate the JSON object in a reply.
///
/// Tries, in order: the body of a fenced ```` ```json ```` block, then the
/// span from the first `{` to the last `}` of the whole text. A fence whose
/// body holds no object is ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    fenced_block(text)
        .and_then(object_span)
        .or_else(|| object_span(text))
}

fn object_span(body: &str) -> Option<&str> {
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (end > start).then(|| &body[start..=end])
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip an optional language tag right after the fence
    let tag_len = after_fence
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_fence.len());
    let body = &after_fence[tag_len..];
    let close = body.find("```")?;
    Some(&body[..close])
}

/// Parse a reply into a structured value.
///
/// A reply that is already a bare JSON object is taken as is; extraction only
/// runs when it is not. Returns `Ok(None)` when the engine produced no output
/// at all (blank text or a JSON `null`), which callers treat differently from
/// malformed output.
pub fn parse_structured_reply(text: &str) -> Result<Option<Value>, ReplyParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(Some(value));
    }

    let json = extract_json_object(trimmed).ok_or(ReplyParseError::NoJsonObject)?;
    serde_json::from_str(json)
        .map(Some)
        .map_err(|e| ReplyParseError::InvalidJson(e.to_string()))
}
