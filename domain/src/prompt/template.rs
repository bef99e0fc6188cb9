//! Instruction templates for the legal QA flow
//!
//! Scope and language policy live here as instruction text. The engine is
//! expected to honor it; nothing in code checks that it did.

use crate::request::QuestionRequest;
use crate::topic::list_topics;
use serde::{Deserialize, Serialize};

/// Fixed reply for questions outside the supported subject areas.
pub const OUT_OF_SCOPE_REPLY: &str = "I'm here to help with basic Indian laws like RTI, consumer rights, road safety, etc. For complex legal matters, please consult a lawyer.";

/// Who complex matters are redirected to.
pub const EXPERT_REFERRAL: &str = "licensed legal expert";

/// Which instruction template the flow renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// Anchored to the selected topic, ends with "Answer in <code>:"
    #[default]
    TopicSpecific,
    /// General bilingual prompt with explicit language format rules
    Bilingual,
}

impl PromptVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVariant::TopicSpecific => "topic_specific",
            PromptVariant::Bilingual => "bilingual",
        }
    }

    /// Name reported to the engine and to logs
    pub fn prompt_name(&self) -> &'static str {
        match self {
            PromptVariant::TopicSpecific => "topic_specific_answer",
            PromptVariant::Bilingual => "bilingual_legal_question",
        }
    }
}

impl std::fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic_specific" => Ok(PromptVariant::TopicSpecific),
            "bilingual" => Ok(PromptVariant::Bilingual),
            other => Err(format!("unknown prompt variant: {other}")),
        }
    }
}

/// Templates for the instruction sent to the generation engine
pub struct LegalPromptTemplate;

impl LegalPromptTemplate {
    /// Render the instruction for `request` with the chosen variant.
    pub fn render(variant: PromptVariant, request: &QuestionRequest) -> String {
        match variant {
            PromptVariant::TopicSpecific => Self::topic_specific(request),
            PromptVariant::Bilingual => Self::bilingual(request),
        }
    }

    /// Persona and subject-area list shared by every variant
    pub fn preamble() -> String {
        let mut text = String::from(
            r#"You are "AI Legal Sakhi", an interactive, bilingual (English + Tamil) legal assistant that helps people understand basic Indian laws in a friendly and simple way. You respond only on the following topics:
"#,
        );
        for topic in list_topics() {
            text.push_str(&format!("\n- {} ({})", topic.name, topic.law));
        }
        text.push('\n');
        text
    }

    fn behavior_rules() -> String {
        format!(
            r#"Behavior:
- Reply in the requested language and only in that language. Never mix English and Tamil in one reply.
- Keep every answer short, clear and in layman terms (aim for school-level clarity).
- Mention the relevant Article, Act or Section only when it makes the answer clearer.
- Do not give advice on complex legal issues like criminal cases, divorce or property disputes. Politely redirect the user to a "{EXPERT_REFERRAL}".
- If the user asks something outside these topics, reply exactly: "{OUT_OF_SCOPE_REPLY}"
- Return a JSON object with a single "answer" field holding your reply."#
        )
    }

    /// Instruction anchored to the topic the user selected
    pub fn topic_specific(request: &QuestionRequest) -> String {
        let language = request.language();
        format!(
            "{preamble}\n{rules}\n\nYou are currently helping with the topic: {topic}.\n\nUser question: {question}\n\nAnswer in {code} ({name}):",
            preamble = Self::preamble(),
            rules = Self::behavior_rules(),
            topic = request.topic(),
            question = request.question(),
            code = language.code(),
            name = language.display_name(),
        )
    }

    /// General bilingual instruction with explicit language format rules
    pub fn bilingual(request: &QuestionRequest) -> String {
        let language = request.language();
        format!(
            r#"{preamble}
{rules}

Language format rules: if the user writes in Tamil, reply in Tamil (don't mix). If the user writes in English, reply in English. If unsure, default to English.
Requested language: {code} ({name})

Topic: {topic}
User Question: {question}

AI Answer:"#,
            preamble = Self::preamble(),
            rules = Self::behavior_rules(),
            code = language.code(),
            name = language.display_name(),
            topic = request.topic(),
            question = request.question(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;

    fn road_safety() -> QuestionRequest {
        QuestionRequest::new("Road Safety Rules", "Can I ride bike without helmet?", Language::En)
            .unwrap()
    }

    #[test]
    fn test_topic_specific_embeds_request_values() {
        let prompt = LegalPromptTemplate::topic_specific(&road_safety());
        assert!(prompt.contains("You are currently helping with the topic: Road Safety Rules."));
        assert!(prompt.contains("User question: Can I ride bike without helmet?"));
        assert!(prompt.ends_with("Answer in en (English):"));
    }

    #[test]
    fn test_every_catalog_topic_is_in_scope_list() {
        let prompt = LegalPromptTemplate::render(PromptVariant::TopicSpecific, &road_safety());
        for topic in list_topics() {
            assert!(prompt.contains(topic.name), "missing {}", topic.name);
            assert!(prompt.contains(topic.law), "missing {}", topic.law);
        }
    }

    #[test]
    fn test_policy_phrases_are_present_in_both_variants() {
        for variant in [PromptVariant::TopicSpecific, PromptVariant::Bilingual] {
            let prompt = LegalPromptTemplate::render(variant, &road_safety());
            assert!(prompt.contains(OUT_OF_SCOPE_REPLY));
            assert!(prompt.contains(EXPERT_REFERRAL));
            assert!(prompt.contains("criminal cases, divorce or property disputes"));
            assert!(prompt.contains("Never mix English and Tamil"));
        }
    }

    #[test]
    fn test_bilingual_carries_language_rules_and_tag() {
        let request = QuestionRequest::new("Basic Labor Laws", "குறைந்தபட்ச ஊதியம்?", Language::Ta).unwrap();
        let prompt = LegalPromptTemplate::bilingual(&request);
        assert!(prompt.contains("Language format rules"));
        assert!(prompt.contains("Requested language: ta (Tamil)"));
        assert!(prompt.contains("User Question: குறைந்தபட்ச ஊதியம்?"));
        assert!(prompt.ends_with("AI Answer:"));
    }

    #[test]
    fn test_unknown_topic_is_forwarded_verbatim() {
        let request = QuestionRequest::new("Tax Filing", "How do I file?", Language::En).unwrap();
        let prompt = LegalPromptTemplate::topic_specific(&request);
        assert!(prompt.contains("topic: Tax Filing."));
    }

    #[test]
    fn test_variant_parse_and_names() {
        assert_eq!("bilingual".parse::<PromptVariant>().unwrap(), PromptVariant::Bilingual);
        assert!("chatty".parse::<PromptVariant>().is_err());
        assert_eq!(PromptVariant::default().prompt_name(), "topic_specific_answer");
        assert_eq!(
            serde_json::to_string(&PromptVariant::TopicSpecific).unwrap(),
            "\"topic_specific\""
        );
    }
}
