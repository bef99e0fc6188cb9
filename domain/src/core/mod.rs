//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: the two supported reply languages
//! - [`error::ValidationError`]: uniform rejection of malformed requests

pub mod error;
pub mod language;
