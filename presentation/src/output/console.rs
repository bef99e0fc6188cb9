//! Console output formatter for topics and answers

use colored::Colorize;
use sakhi_domain::{AnswerResult, Language, Topic};

/// Shown after every answer
pub const DISCLAIMER: &str = "This is an AI assistant for informational purposes only. Please consult a licensed legal expert for professional advice.";

/// Formats catalog listings and answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered topic list with descriptions and example questions
    pub fn format_topics(topics: &[Topic]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Legal Topics"));
        output.push('\n');

        for (i, topic) in topics.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{:>2}.", i + 1).cyan().bold(),
                topic.name.bold()
            ));
            output.push_str(&format!("    {}\n", topic.description.dimmed()));
            for example in topic.examples {
                output.push_str(&format!("      {} {}\n", "*".yellow(), example));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Topics as a JSON array
    pub fn format_topics_json(topics: &[Topic]) -> String {
        serde_json::to_string_pretty(topics).unwrap_or_else(|_| "[]".to_string())
    }

    /// Greeting and example questions shown when a topic is selected
    pub fn format_topic_intro(topic: &Topic) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── {} ──", topic.name).yellow().bold(),
            topic.intro()
        )
    }

    /// Answer followed by the disclaimer, or the error message
    pub fn format_result(result: &AnswerResult, language: Language) -> String {
        match result {
            AnswerResult::Answer { answer } => Self::format_answer(answer, language),
            AnswerResult::Error { error } => Self::format_error(error),
        }
    }

    pub fn format_answer(answer: &str, language: Language) -> String {
        format!(
            "\n{} {}\n{}\n\n{}\n",
            "Answer".green().bold(),
            format!("({})", language.display_name()).dimmed(),
            answer,
            Self::disclaimer()
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Exactly the action's result object
    pub fn format_json(result: &AnswerResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn disclaimer() -> String {
        DISCLAIMER.dimmed().to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
