//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use sakhi_application::AskLegalQuestionUseCase;
use sakhi_domain::{Language, Topic, list_topics};
use serde_json::{Value, json};
use std::path::PathBuf;

/// What the loop should do with one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    /// Print text and keep reading
    Print(String),
    /// Send this raw request to the action
    Ask(Value),
    /// Nothing to do
    Skip,
    /// Leave the chat
    Exit,
}

/// Chat state: the language and the topic currently being discussed
#[derive(Debug, Clone)]
pub struct ChatSession {
    language: Language,
    topic: Option<&'static Topic>,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            topic: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn topic(&self) -> Option<&'static Topic> {
        self.topic
    }

    pub fn prompt(&self) -> String {
        match self.topic {
            Some(topic) => format!("[{}|{}] > ", topic.name, self.language),
            None => format!("[{}] topic> ", self.language),
        }
    }

    /// Interpret one line of input.
    ///
    /// Without a topic, input selects one (by number or name). With a topic,
    /// input is a question about it.
    pub fn handle_input(&mut self, line: &str) -> ChatAction {
        let line = line.trim();
        if line.is_empty() {
            return ChatAction::Skip;
        }

        if line.starts_with('/') {
            return self.handle_command(line);
        }

        match self.topic {
            Some(topic) => ChatAction::Ask(json!({
                "topic": topic.name,
                "question": line,
                "language": self.language.code(),
            })),
            None => match Self::lookup_topic(line) {
                Some(topic) => self.select(topic),
                None => ChatAction::Print(format!(
                    "Unknown topic: {}\nType a number from /topics to choose one.",
                    line
                )),
            },
        }
    }

    fn handle_command(&mut self, cmd: &str) -> ChatAction {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => ChatAction::Exit,
            "/help" | "/h" | "/?" => ChatAction::Print(Self::help_text()),
            "/topics" | "/t" => ChatAction::Print(ConsoleFormatter::format_topics(list_topics())),
            "/topic" => match Self::lookup_topic(arg) {
                Some(topic) => self.select(topic),
                None => ChatAction::Print(format!("Unknown topic: {}", arg)),
            },
            "/back" => {
                self.topic = None;
                ChatAction::Print("Choose a topic (type /topics to list them).".to_string())
            }
            "/lang" | "/language" => {
                let next = if arg.is_empty() {
                    Ok(self.language.toggled())
                } else {
                    arg.parse::<Language>()
                };
                match next {
                    Ok(language) => {
                        self.language = language;
                        ChatAction::Print(format!(
                            "Language: {} ({})",
                            language.display_name(),
                            language.native_name()
                        ))
                    }
                    Err(e) => ChatAction::Print(e.to_string()),
                }
            }
            _ => ChatAction::Print(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
        }
    }

    fn select(&mut self, topic: &'static Topic) -> ChatAction {
        self.topic = Some(topic);
        ChatAction::Print(ConsoleFormatter::format_topic_intro(topic))
    }

    fn lookup_topic(arg: &str) -> Option<&'static Topic> {
        let topics = list_topics();
        if let Ok(index) = arg.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| topics.get(i));
        }
        topics.iter().find(|t| t.name.eq_ignore_ascii_case(arg))
    }

    fn help_text() -> String {
        [
            "",
            "Commands:",
            "  /topics, /t       - List topics",
            "  /topic <n|name>   - Switch topic",
            "  /back             - Leave the current topic",
            "  /lang [en|ta]     - Switch answer language (toggles without argument)",
            "  /help, /h, /?     - Show this help",
            "  /quit, /exit, /q  - Exit chat",
            "",
        ]
        .join("\n")
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    action: AskLegalQuestionUseCase,
    session: ChatSession,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(action: AskLegalQuestionUseCase, language: Language) -> Self {
        Self {
            action,
            session: ChatSession::new(language),
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Keep line history in this file (none when `None`)
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(&self.session.prompt()) {
                Ok(line) => {
                    let action = self.session.handle_input(&line);
                    match action {
                        ChatAction::Skip => continue,
                        ChatAction::Exit => {
                            println!("Bye!");
                            break;
                        }
                        ChatAction::Print(text) => println!("{}", text),
                        ChatAction::Ask(raw) => {
                            let _ = rl.add_history_entry(line.trim());
                            self.process_question(&raw).await;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Legal Sakhi - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Language: {} ({})",
            self.session.language().display_name(),
            self.session.language().native_name()
        );
        print!("{}", ConsoleFormatter::format_topics(list_topics()));
        println!("Type a topic number to start. /help lists commands.");
        println!();
    }

    async fn process_question(&self, raw: &Value) {
        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.action.execute_with_progress(raw, &progress).await
        } else {
            self.action.execute(raw).await
        };

        // Failed answers are reported, not kept as part of the conversation
        if result.is_answer() {
            println!(
                "{}",
                ConsoleFormatter::format_result(&result, self.session.language())
            );
        } else {
            eprintln!("{}", ConsoleFormatter::format_result(&result, self.session.language()));
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(action: ChatAction) -> String {
        match action {
            ChatAction::Print(text) => text,
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn test_number_selects_topic_and_shows_intro() {
        let mut session = ChatSession::new(Language::En);

        let text = printed(session.handle_input("5"));

        assert_eq!(session.topic().map(|t| t.name), Some("Road Safety Rules"));
        assert!(text.contains("For example, you can ask:"));
        assert!(text.contains("Can I ride bike without helmet?"));
    }

    #[test]
    fn test_question_builds_raw_request() {
        let mut session = ChatSession::new(Language::Ta);
        session.handle_input("Consumer Protection");

        let action = session.handle_input("  பணம் திரும்ப கிடைக்குமா?  ");

        assert_eq!(
            action,
            ChatAction::Ask(json!({
                "topic": "Consumer Protection",
                "question": "பணம் திரும்ப கிடைக்குமா?",
                "language": "ta"
            }))
        );
    }

    #[test]
    fn test_unknown_topic_is_reported() {
        let mut session = ChatSession::new(Language::En);
        let text = printed(session.handle_input("Astrology"));
        assert!(text.starts_with("Unknown topic"));
        assert!(session.topic().is_none());
    }

    #[test]
    fn test_lang_toggles_and_sets() {
        let mut session = ChatSession::new(Language::En);

        session.handle_input("/lang");
        assert_eq!(session.language(), Language::Ta);

        session.handle_input("/lang en");
        assert_eq!(session.language(), Language::En);

        let text = printed(session.handle_input("/lang fr"));
        assert!(text.contains("Unsupported language"));
        assert_eq!(session.language(), Language::En);
    }

    #[test]
    fn test_back_and_topic_commands() {
        let mut session = ChatSession::new(Language::En);
        session.handle_input("/topic 2");
        assert_eq!(
            session.topic().map(|t| t.name),
            Some("Right to Information (RTI)")
        );

        session.handle_input("/back");
        assert!(session.topic().is_none());
        assert!(session.prompt().contains("topic>"));
    }

    #[test]
    fn test_quit_blank_and_unknown_commands() {
        let mut session = ChatSession::new(Language::En);
        assert_eq!(session.handle_input("/quit"), ChatAction::Exit);
        assert_eq!(session.handle_input("   "), ChatAction::Skip);
        assert!(printed(session.handle_input("/models")).starts_with("Unknown command"));
    }
}
