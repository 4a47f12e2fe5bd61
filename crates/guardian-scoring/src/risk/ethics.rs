use std::collections::BTreeMap;

use guardian_core::models::{FeatureVector, RiskAssessment};
use serde::{Deserialize, Serialize};

use super::bounded;

/// Ethics risk inputs, each in [0, 1]. Missing values default to 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EthicsRiskInput {
    pub transparency: f64,
    pub bias_factor: f64,
    pub autonomy_risk: f64,
}

impl Default for EthicsRiskInput {
    fn default() -> Self {
        Self {
            transparency: 0.5,
            bias_factor: 0.5,
            autonomy_risk: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EthicsRiskAssessor;

impl EthicsRiskAssessor {
    /// `(1 − transparency) · bias · autonomy × 100`, clamped to [0, 100].
    pub fn assess(&self, input: &EthicsRiskInput) -> RiskAssessment {
        let t = bounded(input.transparency, 0.5, 0.0, 1.0);
        let b = bounded(input.bias_factor, 0.5, 0.0, 1.0);
        let a = bounded(input.autonomy_risk, 0.5, 0.0, 1.0);
        let contributions = BTreeMap::from([
            ("opacity".to_string(), 1.0 - t),
            ("bias_factor".to_string(), b),
            ("autonomy_risk".to_string(), a),
        ]);
        RiskAssessment::new((1.0 - t) * b * a * 100.0, contributions)
    }

    pub fn inputs_from_features(features: &FeatureVector) -> EthicsRiskInput {
        let es = features.ethics_strength;
        EthicsRiskInput {
            transparency: (0.3 + 0.6 * es).min(0.9),
            bias_factor: (0.6 - 0.5 * es).max(0.1),
            autonomy_risk: (0.5 - 0.4 * es).max(0.1),
        }
    }
}
