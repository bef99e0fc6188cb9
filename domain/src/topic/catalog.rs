//! The fixed catalog of legal topics.
//!
//! The set is closed: six topics defined once as static data, exposed in
//! definition order through [`list_topics`]. Nothing can register, remove or
//! mutate a topic at runtime.

use serde::Serialize;

/// A supported legal subject area (Value Object)
///
/// `name` is the primary key. It is the string the presentation layer sends
/// as the request topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Unique display name
    pub name: &'static str,
    /// One-line description shown on topic selection
    pub description: &'static str,
    /// Onboarding message shown when the topic is opened
    pub greeting: &'static str,
    /// Example questions, in display order
    pub examples: &'static [&'static str],
    /// The body of law the topic is grounded in, named in the engine instruction
    pub law: &'static str,
}

impl Topic {
    /// The onboarding message for a freshly opened topic: greeting plus examples.
    pub fn intro(&self) -> String {
        let mut intro = format!("{}\nFor example, you can ask:", self.greeting);
        for example in self.examples {
            intro.push_str("\n  - ");
            intro.push_str(example);
        }
        intro
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

static TOPICS: [Topic; 6] = [
    Topic {
        name: "Fundamental Rights & Duties",
        description: "Understand your constitutional rights and obligations.",
        greeting: "I can help with questions about Fundamental Rights and Duties as per the Indian Constitution.",
        examples: &[
            "What is the right to equality?",
            "Can I practice any religion I want?",
            "What are my duties as a citizen?",
        ],
        law: "Indian Constitution",
    },
    Topic {
        name: "Right to Information (RTI)",
        description: "Learn to request information from public authorities.",
        greeting: "Ask me about the Right to Information (RTI) Act and how to use it.",
        examples: &[
            "How do I file an RTI?",
            "What information can I ask for?",
            "How much does it cost to file an RTI?",
        ],
        law: "RTI Act",
    },
    Topic {
        name: "Consumer Protection",
        description: "Know your rights as a consumer against faulty products.",
        greeting: "Tell me your consumer-related issues. I can guide you on your rights.",
        examples: &[
            "What if I get a fake product from online site?",
            "How to file a consumer complaint?",
            "What are my rights if a product is defective?",
        ],
        law: "Consumer Rights",
    },
    Topic {
        name: "Basic Cyber Laws",
        description: "Basic awareness about cybercrimes and online safety.",
        greeting: "I can answer basic questions about cyber laws and online safety based on the IT Act.",
        examples: &[
            "Is online harassment a crime?",
            "What to do if my social media account is hacked?",
            "What is phishing?",
        ],
        law: "IT Act",
    },
    Topic {
        name: "Road Safety Rules",
        description: "Essential traffic rules under the Motor Vehicles Act.",
        greeting: "Ask me about road safety and traffic rules in India.",
        examples: &[
            "Can I ride bike without helmet?",
            "What is the fine for jumping a red light?",
            "Is it compulsory to have insurance for my vehicle?",
        ],
        law: "Motor Vehicle Laws",
    },
    Topic {
        name: "Basic Labor Laws",
        description: "Information on workplace rights and basic labor laws.",
        greeting: "I can help you with basic questions about your rights at work.",
        examples: &[
            "What are the standard working hours?",
            "Am I eligible for minimum wage?",
            "What to do in case of unsafe working conditions?",
        ],
        law: "Workplace Rights",
    },
];

/// All supported topics, in definition order.
pub fn list_topics() -> &'static [Topic] {
    &TOPICS
}

/// Look up a topic by its exact name.
pub fn find_topic(name: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.name == name)
}

/// Whether `name` names a catalog topic.
pub fn is_known_topic(name: &str) -> bool {
    find_topic(name).is_some()
}
