use guardian_core::models::{CorrectionRule, TopicRule};

use super::{finish, literal_trigger, Indicators};

/// Known topic with the names it goes by and the keywords that signal it.
pub struct TopicKeywords {
    pub topic: &'static str,
    pub aliases: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub const TOPICS: &[TopicKeywords] = &[
    TopicKeywords {
        topic: "AI",
        aliases: &["ai", "artificial intelligence"],
        keywords: &[
            "artificial intelligence",
            "machine learning",
            "ai system",
            "ai governance",
            "ai risk",
            "neural network",
            "deep learning",
            "large language model",
            "generative ai",
            "algorithmic",
        ],
    },
    TopicKeywords {
        topic: "Quantum",
        aliases: &["quantum", "quantum computing"],
        keywords: &[
            "quantum computing",
            "quantum",
            "post-quantum",
            "quantum-resistant",
            "qubit",
            "quantum key distribution",
            "quantum cryptography",
        ],
    },
    TopicKeywords {
        topic: "Cybersecurity",
        aliases: &["cybersecurity", "cyber security", "cyber"],
        keywords: &[
            "cybersecurity",
            "cyber security",
            "zero trust",
            "incident response",
            "threat",
            "vulnerability",
            "encryption",
            "ransomware",
        ],
    },
    TopicKeywords {
        topic: "Privacy",
        aliases: &["privacy", "data privacy"],
        keywords: &[
            "privacy",
            "personal data",
            "personally identifiable",
            "data protection",
            "gdpr",
            "consent",
        ],
    },
];

/// Keyword set for a corrected topic value, matched on name or alias.
pub fn lookup(value: &str) -> Option<&'static TopicKeywords> {
    let value = value.trim().to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.topic.to_lowercase() == value || t.aliases.contains(&value.as_str()))
}

pub fn mine(corrected: &str, sample: &str) -> Option<Indicators> {
    let lowered = sample.to_lowercase();
    let mut triggers: Vec<String> = lookup(corrected)
        .map(|t| {
            t.keywords
                .iter()
                .filter(|k| lowered.contains(*k))
                .map(|k| k.to_string())
                .collect()
        })
        .unwrap_or_default();
    triggers.extend(literal_trigger(&lowered, corrected));

    finish(
        triggers,
        CorrectionRule::Topic(TopicRule {
            topic: corrected.to_string(),
        }),
    )
}
