//! Topic catalog
//!
//! The static registry of legal subject areas the assistant answers about.

mod catalog;

pub use catalog::{Topic, find_topic, is_known_topic, list_topics};
