//! Progress reporting while an answer is generated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sakhi_application::AnswerProgressNotifier;
use sakhi_domain::Language;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the engine works
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn waiting_message(language: Language) -> &'static str {
        match language {
            Language::En => "Thinking...",
            Language::Ta => "யோசிக்கிறேன்...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerProgressNotifier for ProgressReporter {
    fn on_engine_start(&self, topic: &str, language: Language) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(topic.to_string());
        pb.set_message(Self::waiting_message(language));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_engine_complete(&self, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AnswerProgressNotifier for SimpleProgress {
    fn on_engine_start(&self, topic: &str, language: Language) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            topic.bold(),
            ProgressReporter::waiting_message(language)
        );
    }

    fn on_engine_complete(&self, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}
