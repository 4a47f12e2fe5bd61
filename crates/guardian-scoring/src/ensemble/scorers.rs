use std::collections::BTreeMap;

use guardian_core::config::ScoringConfig;

use super::{Scorer, ScorerOutput};
use crate::features::FeatureExtractor;
use crate::frameworks::FrameworkScores;

/// Keyword-indicator scorer over the four frameworks.
pub struct FrameworkScorer {
    extractor: FeatureExtractor,
}

impl FrameworkScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config),
        }
    }
}

impl Scorer for FrameworkScorer {
    fn name(&self) -> &str {
        "framework_indicators"
    }

    fn reliability(&self) -> f64 {
        1.0
    }

    fn score(&self, content: &str, title: &str) -> ScorerOutput {
        let window = self.extractor.analysis_window(content, Some(title));
        let fw = FrameworkScores::evaluate(&window);
        let scores = BTreeMap::from([
            ("ai_cybersecurity".to_string(), fw.ai_cybersecurity.total),
            (
                "quantum_cybersecurity".to_string(),
                f64::from(fw.quantum_cybersecurity.level) * 20.0,
            ),
            ("ai_ethics".to_string(), fw.ai_ethics.total),
            ("quantum_ethics".to_string(), fw.quantum_ethics.total),
        ]);
        ScorerOutput {
            scores,
            confidence: 0.5 + 0.5 * fw.signal_coverage,
        }
    }
}

/// Scores derived from feature densities rather than framework indicators.
pub struct FeatureDensityScorer {
    extractor: FeatureExtractor,
}

impl FeatureDensityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config),
        }
    }
}

impl Scorer for FeatureDensityScorer {
    fn name(&self) -> &str {
        "feature_density"
    }

    fn reliability(&self) -> f64 {
        0.8
    }

    fn score(&self, content: &str, title: &str) -> ScorerOutput {
        let window = self.extractor.analysis_window(content, Some(title));
        let unanalyzable = self.extractor.is_unanalyzable(&window);
        let f = self.extractor.extract_window(&window);
        let scores = BTreeMap::from([
            ("ai_cybersecurity".to_string(), 100.0 * f.cyber_strength),
            (
                "quantum_cybersecurity".to_string(),
                100.0 * f.quantum_relevance * f.cyber_strength,
            ),
            ("ai_ethics".to_string(), 100.0 * f.ethics_strength),
            (
                "quantum_ethics".to_string(),
                100.0 * f.quantum_relevance * f.ethics_strength,
            ),
        ]);
        ScorerOutput {
            scores,
            confidence: if unanalyzable { 0.4 } else { 0.8 },
        }
    }
}
