//! PatternApplier: replay eligible learned patterns against new content.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use guardian_core::config::LearningConfig;
use guardian_core::models::{CorrectionRule, LearnedPattern, Metadata};
use guardian_core::text::prefix_chars;
use guardian_core::traits::IPatternStore;

use crate::extraction::{author, title};

pub struct PatternApplier {
    patterns: Arc<dyn IPatternStore>,
    min_confidence: f64,
    trigger_match_ratio: f64,
    content_chars: usize,
}

impl PatternApplier {
    pub fn new(patterns: Arc<dyn IPatternStore>, config: &LearningConfig) -> Self {
        Self {
            patterns,
            min_confidence: config.min_pattern_confidence,
            trigger_match_ratio: config.trigger_match_ratio,
            content_chars: config.content_sample_chars,
        }
    }

    /// Return `metadata` adjusted by every applicable pattern. The input is
    /// never modified. Store failures and malformed patterns are logged and
    /// leave the affected fields untouched.
    pub fn apply(&self, content: &str, metadata: &Metadata) -> Metadata {
        let mut adjusted = metadata.clone();

        let records = match self.patterns.list_patterns() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "pattern store unavailable, metadata unchanged");
                return adjusted;
            }
        };

        let mut eligible: Vec<LearnedPattern> = records
            .iter()
            .filter_map(|record| match LearnedPattern::decode(record) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern_id = %record.pattern_id, error = %e, "skipping malformed pattern");
                    None
                }
            })
            .filter(|p| p.confidence.is_eligible(self.min_confidence))
            .collect();
        eligible.sort_by(|a, b| {
            b.confidence
                .value()
                .total_cmp(&a.confidence.value())
                .then_with(|| a.pattern_id.cmp(&b.pattern_id))
        });

        let window = prefix_chars(content, self.content_chars);
        let lowered = window.to_lowercase();
        let mut touched: BTreeSet<&'static str> = BTreeSet::new();

        for pattern in &eligible {
            let field = pattern.pattern_type.as_str();
            if touched.contains(field) || !self.triggers_match(pattern, &lowered) {
                continue;
            }
            if let Some(value) = execute(&pattern.correction_rule, window) {
                debug!(pattern_id = %pattern.pattern_id, field, value = %value, "pattern applied");
                adjusted.insert(field.to_string(), value);
                touched.insert(field);
            }
        }

        adjusted
    }

    /// At least `trigger_match_ratio` of the triggers occur in `lowered`.
    /// Underscores in a trigger read as spaces.
    pub fn triggers_match(&self, pattern: &LearnedPattern, lowered: &str) -> bool {
        let total = pattern.trigger_conditions.len();
        if total == 0 {
            return false;
        }
        let found = pattern
            .trigger_conditions
            .iter()
            .filter(|t| lowered.contains(&t.to_lowercase().replace('_', " ")))
            .count();
        found as f64 / total as f64 >= self.trigger_match_ratio
    }
}

/// Run one rule against the content window. `None` when the rule produced
/// no value.
fn execute(rule: &CorrectionRule, window: &str) -> Option<String> {
    match rule {
        CorrectionRule::Topic(r) => Some(r.topic.clone()),
        CorrectionRule::Organization(r) => Some(r.organization.clone()),
        CorrectionRule::Title(r) => match title::category(&r.category) {
            Some(category) => category.extract_first(window),
            None => {
                warn!(category = %r.category, "unknown title category");
                None
            }
        },
        CorrectionRule::Author(r) => author::extract(&r.label, window),
    }
}
