use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Characters of `title + content` analyzed per call.
    pub content_prefix_chars: usize,
    /// Inputs shorter than this (after trimming) get conservative feature defaults.
    pub min_analyzable_chars: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            content_prefix_chars: defaults::DEFAULT_CONTENT_PREFIX_CHARS,
            min_analyzable_chars: defaults::DEFAULT_MIN_ANALYZABLE_CHARS,
        }
    }
}
