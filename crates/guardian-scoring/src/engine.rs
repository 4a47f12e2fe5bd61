//! ScoringEngine: orchestrates the full assessment of one document.

use guardian_core::config::ScoringConfig;
use guardian_core::models::ComprehensiveScores;
use rayon::prelude::*;
use tracing::debug;

use crate::effectiveness::{EffectivenessInputs, EffectivenessScorer, StressInputs};
use crate::ensemble::{Ensemble, EnsembleResult, FeatureDensityScorer, FrameworkScorer};
use crate::features::FeatureExtractor;
use crate::frameworks::FrameworkScores;
use crate::gap::GapAnalyzer;
use crate::maturity::MaturityEstimator;
use crate::risk::{CyberRiskAssessor, EthicsRiskAssessor};

/// Pure, stateless document scorer. Safe to share across threads.
pub struct ScoringEngine {
    config: ScoringConfig,
    extractor: FeatureExtractor,
    ensemble: Ensemble,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        let ensemble = Ensemble::new()
            .with_scorer(Box::new(FrameworkScorer::new(&config)))
            .with_scorer(Box::new(FeatureDensityScorer::new(&config)));
        Self {
            extractor: FeatureExtractor::new(&config),
            config,
            ensemble,
        }
    }

    /// Replace the consensus ensemble.
    pub fn with_ensemble(mut self, ensemble: Ensemble) -> Self {
        self.ensemble = ensemble;
        self
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Score one document across every framework and scorer. Never fails.
    pub fn assess(&self, content: &str, title: &str) -> ComprehensiveScores {
        let window = self.extractor.analysis_window(content, Some(title));
        let features = self.extractor.extract_window(&window);

        let cyber_risk =
            CyberRiskAssessor.assess(&CyberRiskAssessor::inputs_from_features(&features));
        let ethics_risk =
            EthicsRiskAssessor.assess(&EthicsRiskAssessor::inputs_from_features(&features));
        let maturity =
            MaturityEstimator.estimate(&MaturityEstimator::observation_from_features(&features));
        let gap_report = GapAnalyzer.analyze(&window, self.config.content_prefix_chars);

        let scorer = EffectivenessScorer;
        let effectiveness = scorer.score_inputs(&EffectivenessInputs::from_features(&features));
        let stress = scorer.score_stress(&StressInputs::from_features(&features));

        let frameworks = FrameworkScores::evaluate(&window);

        let overall = ((100.0 - cyber_risk.score)
            + (100.0 - ethics_risk.score)
            + effectiveness
            + stress)
            / 4.0;

        debug!(
            cyber_risk = cyber_risk.score,
            ethics_risk = ethics_risk.score,
            gap = gap_report.gap_score,
            qcmea = frameworks.quantum_cybersecurity.level,
            "document assessed"
        );

        ComprehensiveScores {
            ai_cybersecurity_score: frameworks.ai_cybersecurity.rounded(),
            quantum_cybersecurity_score: frameworks.quantum_cybersecurity.level,
            ai_ethics_score: frameworks.ai_ethics.rounded(),
            quantum_ethics_score: frameworks.quantum_ethics.rounded(),
            maturity_distribution: maturity,
            policy_gap: gap_report.gap_score,
            policy_effectiveness: effectiveness,
            stress_testing_score: stress,
            overall_score: overall.clamp(0.0, 100.0),
            cyber_risk_score: cyber_risk.score,
            ethics_risk_score: ethics_risk.score,
            features,
            gap_report,
        }
    }

    /// Score independent documents in parallel. Output order matches input.
    pub fn assess_batch(&self, documents: &[(String, String)]) -> Vec<ComprehensiveScores> {
        documents
            .par_iter()
            .map(|(content, title)| self.assess(content, title))
            .collect()
    }

    /// Confidence-weighted consensus of the configured scorers.
    pub fn consensus(&self, content: &str, title: &str) -> EnsembleResult {
        self.ensemble.evaluate(content, title)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
