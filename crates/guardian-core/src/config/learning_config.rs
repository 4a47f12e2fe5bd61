use serde::{Deserialize, Serialize};

use super::defaults;

/// Correction-learning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Characters of content hashed and mined for indicators.
    pub content_sample_chars: usize,
    /// Patterns below this confidence are never applied.
    pub min_pattern_confidence: f64,
    /// Fraction of a pattern's triggers that must occur in the content.
    pub trigger_match_ratio: f64,
    /// Stored pattern cap; the weakest patterns are swept beyond it.
    pub max_patterns: usize,
    /// Confidence added when an applied pattern is confirmed.
    pub confirm_boost: f64,
    /// Confidence removed when an applied pattern is overridden.
    pub reject_penalty: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            content_sample_chars: defaults::DEFAULT_CONTENT_SAMPLE_CHARS,
            min_pattern_confidence: defaults::DEFAULT_MIN_PATTERN_CONFIDENCE,
            trigger_match_ratio: defaults::DEFAULT_TRIGGER_MATCH_RATIO,
            max_patterns: defaults::DEFAULT_MAX_PATTERNS,
            confirm_boost: defaults::DEFAULT_CONFIRM_BOOST,
            reject_penalty: defaults::DEFAULT_REJECT_PENALTY,
        }
    }
}
