//! Incoming question requests and their validation.

mod question;
mod validation;

pub use question::QuestionRequest;
pub use validation::validate;
