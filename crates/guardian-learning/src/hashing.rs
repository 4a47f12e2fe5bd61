//! Content and pattern identity.

use guardian_core::models::{CorrectionRule, PatternType};
use guardian_core::text::prefix_chars;
use guardian_core::GuardianResult;

/// The bounded sample that is stored and hashed.
pub fn content_sample(content: &str, max_chars: usize) -> &str {
    prefix_chars(content, max_chars)
}

pub fn content_hash(sample: &str) -> String {
    blake3::hash(sample.as_bytes()).to_hex().to_string()
}

/// Stable id over type, sorted triggers and the canonical rule JSON.
/// The same correction mined twice yields the same id.
pub fn pattern_id(
    pattern_type: PatternType,
    triggers: &[String],
    rule: &CorrectionRule,
) -> GuardianResult<String> {
    let mut sorted: Vec<&str> = triggers.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut hasher = blake3::Hasher::new();
    hasher.update(pattern_type.as_str().as_bytes());
    hasher.update(b"\0");
    for trigger in sorted {
        hasher.update(trigger.as_bytes());
        hasher.update(b"\0");
    }
    hasher.update(rule.to_json()?.as_bytes());
    Ok(hasher.finalize().to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_core::models::TopicRule;

    #[test]
    fn pattern_id_ignores_trigger_order() {
        let rule = CorrectionRule::Topic(TopicRule { topic: "AI".into() });
        let a = pattern_id(
            PatternType::Topic,
            &["machine learning".into(), "artificial intelligence".into()],
            &rule,
        )
        .unwrap();
        let b = pattern_id(
            PatternType::Topic,
            &["artificial intelligence".into(), "machine learning".into()],
            &rule,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pattern_id_depends_on_rule() {
        let triggers = vec!["quantum".to_string()];
        let a = pattern_id(
            PatternType::Topic,
            &triggers,
            &CorrectionRule::Topic(TopicRule { topic: "Quantum".into() }),
        )
        .unwrap();
        let b = pattern_id(
            PatternType::Topic,
            &triggers,
            &CorrectionRule::Topic(TopicRule { topic: "AI".into() }),
        )
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sample_hash_is_stable() {
        let sample = content_sample("abcdef", 3);
        assert_eq!(sample, "abc");
        assert_eq!(content_hash(sample), content_hash("abc"));
        assert_eq!(content_hash(sample).len(), 64);
    }
}
