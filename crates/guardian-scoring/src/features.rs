//! Keyword-density feature extraction.

use guardian_core::config::ScoringConfig;
use guardian_core::models::FeatureVector;
use guardian_core::text::{count_present, prefix_chars};

pub const TECHNICAL_TERMS: &[&str] =
    &["algorithm", "framework", "protocol", "architecture", "implementation"];
pub const POLICY_TERMS: &[&str] = &["policy", "regulation", "compliance", "governance", "standard"];
pub const COMPLIANCE_TERMS: &[&str] = &["nist", "iso", "gdpr", "sox", "hipaa", "compliance"];
pub const CYBER_TERMS: &[&str] =
    &["security", "encryption", "authentication", "authorization", "firewall"];
pub const ETHICS_TERMS: &[&str] = &["ethics", "bias", "fairness", "transparency", "accountability"];
pub const AI_TERMS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "neural network",
    "ai system",
    "generative ai",
];
pub const QUANTUM_TERMS: &[&str] = &[
    "quantum",
    "post-quantum",
    "qubit",
    "quantum computing",
    "quantum cryptography",
];

/// Turns document text into a [`FeatureVector`].
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    prefix_chars: usize,
    min_analyzable_chars: usize,
}

impl FeatureExtractor {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            prefix_chars: config.content_prefix_chars,
            min_analyzable_chars: config.min_analyzable_chars,
        }
    }

    /// Lowercased, truncated analysis window over `title + " " + text`.
    pub fn analysis_window(&self, text: &str, title: Option<&str>) -> String {
        let combined = match title {
            Some(t) if !t.is_empty() => format!("{t} {text}"),
            _ => text.to_string(),
        };
        prefix_chars(&combined, self.prefix_chars).to_lowercase()
    }

    /// Whether the window holds too little text to score meaningfully.
    pub fn is_unanalyzable(&self, window: &str) -> bool {
        window.trim().chars().count() < self.min_analyzable_chars
    }

    /// Extract the feature vector. Never fails; short input gets
    /// [`FeatureVector::conservative_defaults`].
    pub fn extract(&self, text: &str, title: Option<&str>) -> FeatureVector {
        let window = self.analysis_window(text, title);
        self.extract_window(&window)
    }

    /// Extract from an already-normalized analysis window.
    pub fn extract_window(&self, window: &str) -> FeatureVector {
        if self.is_unanalyzable(window) {
            return FeatureVector::conservative_defaults();
        }
        FeatureVector {
            technical_complexity: density(window, TECHNICAL_TERMS),
            policy_relevance: density(window, POLICY_TERMS),
            compliance_indicators: density(window, COMPLIANCE_TERMS),
            cyber_strength: density(window, CYBER_TERMS),
            ethics_strength: density(window, ETHICS_TERMS),
            ai_relevance: density(window, AI_TERMS),
            quantum_relevance: density(window, QUANTUM_TERMS),
        }
        .clamped()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

/// Fraction of `terms` present in `window`.
fn density(window: &str, terms: &[&str]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    count_present(window, terms) as f64 / terms.len() as f64
}
