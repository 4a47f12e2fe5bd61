//! Policy effectiveness and stress-test scoring.

use guardian_core::models::FeatureVector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessInputs {
    pub success_probability: f64,
    pub regulatory_influence: f64,
    pub ethical_compliance: f64,
}

impl EffectivenessInputs {
    pub fn from_features(features: &FeatureVector) -> Self {
        Self {
            success_probability: (0.4 + 0.5 * features.policy_relevance).min(0.9),
            regulatory_influence: (0.5 + 0.4 * features.compliance_indicators).min(0.9),
            ethical_compliance: (0.4 + 0.5 * features.ethics_strength).min(0.9),
        }
    }
}

/// Ethical Compliance, Adaptability, Legal Alignment and Implementation
/// Feasibility sub-scores, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressInputs {
    pub ecs: f64,
    pub as_: f64,
    pub las: f64,
    pub ifs: f64,
}

impl StressInputs {
    pub fn from_features(features: &FeatureVector) -> Self {
        let tc = features.technical_complexity;
        Self {
            ecs: (60.0 + 35.0 * features.ethics_strength).min(95.0),
            as_: (50.0 + 40.0 * tc).min(90.0),
            las: (65.0 + 30.0 * features.compliance_indicators).min(95.0),
            ifs: (45.0 + 20.0 * (tc + features.policy_relevance)).min(85.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EffectivenessScorer;

impl EffectivenessScorer {
    /// Product of the three factors × 100, clamped to [0, 100].
    pub fn effectiveness(
        &self,
        success_probability: f64,
        regulatory_influence: f64,
        ethical_compliance: f64,
    ) -> f64 {
        clamp_score(success_probability * regulatory_influence * ethical_compliance * 100.0)
    }

    /// Arithmetic mean of the four sub-scores, clamped to [0, 100].
    pub fn stress_test(&self, ecs: f64, as_: f64, las: f64, ifs: f64) -> f64 {
        clamp_score((ecs + as_ + las + ifs) / 4.0)
    }

    /// `Σ wᵢ·sᵢ` clamped to [0, 1]; 0 when the slices differ in length.
    pub fn success_probability(&self, components: &[f64], weights: &[f64]) -> f64 {
        if components.len() != weights.len() {
            return 0.0;
        }
        let p: f64 = components.iter().zip(weights).map(|(s, w)| s * w).sum();
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn score_inputs(&self, inputs: &EffectivenessInputs) -> f64 {
        self.effectiveness(
            inputs.success_probability,
            inputs.regulatory_influence,
            inputs.ethical_compliance,
        )
    }

    pub fn score_stress(&self, inputs: &StressInputs) -> f64 {
        self.stress_test(inputs.ecs, inputs.as_, inputs.las, inputs.ifs)
    }
}

fn clamp_score(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
