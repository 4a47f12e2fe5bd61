//! Indicator extraction: which literal content signals accompany a
//! corrected field value. Found indicators become a pattern's triggers.

pub mod author;
pub mod organization;
pub mod title;
pub mod topic;

use guardian_core::models::{CorrectionRule, PatternType};

/// Triggers plus the rule they should fire.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicators {
    /// Lowercase literal phrases, sorted and deduplicated.
    pub triggers: Vec<String>,
    pub rule: CorrectionRule,
}

/// Run the extractor for `pattern_type` over `sample`. `None` when the
/// sample carries no signal for the corrected value.
pub fn mine(pattern_type: PatternType, corrected: &str, sample: &str) -> Option<Indicators> {
    let corrected = corrected.trim();
    if corrected.is_empty() || sample.trim().is_empty() {
        return None;
    }
    match pattern_type {
        PatternType::Topic => topic::mine(corrected, sample),
        PatternType::Organization => organization::mine(corrected, sample),
        PatternType::Title => title::mine(corrected, sample),
        PatternType::Author => author::mine(corrected, sample),
    }
}

/// Whether `needle` occurs in `haystack` with no alphanumeric neighbours.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, m)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// The corrected value itself as a trigger, if it appears as a whole word
/// and is long enough not to fire on unrelated text.
pub(crate) fn literal_trigger(lowered_sample: &str, value: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    (value.chars().count() >= 3 && contains_word(lowered_sample, &value)).then_some(value)
}

pub(crate) fn finish(mut triggers: Vec<String>, rule: CorrectionRule) -> Option<Indicators> {
    triggers.sort();
    triggers.dedup();
    (!triggers.is_empty()).then_some(Indicators { triggers, rule })
}
