use std::collections::BTreeMap;

use guardian_core::models::{FeatureVector, RiskAssessment};
use serde::{Deserialize, Serialize};

use super::bounded;

/// Vulnerability inputs are on a 0–5 scale and normalized by this.
pub const MAX_VULNERABILITY: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyberCategory {
    Authentication,
    Encryption,
    AccessControl,
    Monitoring,
}

impl CyberCategory {
    pub const ALL: [CyberCategory; 4] = [
        Self::Authentication,
        Self::Encryption,
        Self::AccessControl,
        Self::Monitoring,
    ];

    /// Fixed category weight. Weights sum to 1.
    pub fn weight(self) -> f64 {
        match self {
            Self::Authentication => 0.3,
            Self::Encryption => 0.25,
            Self::AccessControl => 0.25,
            Self::Monitoring => 0.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Encryption => "encryption",
            Self::AccessControl => "access_control",
            Self::Monitoring => "monitoring",
        }
    }
}

/// Risk inputs for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyberRiskInput {
    /// 0–5.
    pub vulnerability: f64,
    /// 0–1.
    pub likelihood: f64,
    /// 0–1.
    pub impact: f64,
}

impl Default for CyberRiskInput {
    fn default() -> Self {
        Self {
            vulnerability: 3.0,
            likelihood: 0.5,
            impact: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CyberRiskAssessor;

impl CyberRiskAssessor {
    /// `Σ wᵢ · (vᵢ/5) · lᵢ · iᵢ × 100`, clamped to [0, 100].
    /// Categories absent from `inputs` use [`CyberRiskInput::default`].
    pub fn assess(&self, inputs: &BTreeMap<CyberCategory, CyberRiskInput>) -> RiskAssessment {
        let defaults = CyberRiskInput::default();
        let mut contributions = BTreeMap::new();
        let mut total = 0.0;
        for category in CyberCategory::ALL {
            let input = inputs.get(&category).copied().unwrap_or(defaults);
            let v = bounded(input.vulnerability, defaults.vulnerability, 0.0, MAX_VULNERABILITY)
                / MAX_VULNERABILITY;
            let l = bounded(input.likelihood, defaults.likelihood, 0.0, 1.0);
            let i = bounded(input.impact, defaults.impact, 0.0, 1.0);
            let contribution = category.weight() * v * l * i;
            contributions.insert(category.as_str().to_string(), contribution);
            total += contribution;
        }
        RiskAssessment::new(total * 100.0, contributions)
    }

    /// Category inputs derived from cyber strength: stronger documented
    /// controls lower both vulnerability and likelihood.
    pub fn inputs_from_features(features: &FeatureVector) -> BTreeMap<CyberCategory, CyberRiskInput> {
        let cs = features.cyber_strength;
        let input = |v: f64, l: f64, impact: f64| CyberRiskInput {
            vulnerability: v.max(0.5),
            likelihood: l.max(0.1),
            impact,
        };
        BTreeMap::from([
            (CyberCategory::Authentication, input(3.0 - 2.0 * cs, 0.5 - 0.3 * cs, 0.7)),
            (CyberCategory::Encryption, input(2.5 - 1.5 * cs, 0.4 - 0.2 * cs, 0.8)),
            (CyberCategory::AccessControl, input(2.8 - 1.8 * cs, 0.45 - 0.25 * cs, 0.6)),
            (CyberCategory::Monitoring, input(3.2 - 2.2 * cs, 0.6 - 0.4 * cs, 0.5)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = CyberCategory::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn maximal_inputs_reach_one_hundred() {
        let inputs = CyberCategory::ALL
            .iter()
            .map(|c| {
                (*c, CyberRiskInput { vulnerability: 5.0, likelihood: 1.0, impact: 1.0 })
            })
            .collect();
        let risk = CyberRiskAssessor.assess(&inputs);
        assert!((risk.score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_use_defaults() {
        let risk = CyberRiskAssessor.assess(&BTreeMap::new());
        // (3/5) * 0.5 * 0.7 = 0.21 across all weights
        assert!((risk.score - 21.0).abs() < 1e-9);
        assert_eq!(risk.contributions.len(), 4);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let inputs = BTreeMap::from([(
            CyberCategory::Authentication,
            CyberRiskInput { vulnerability: 50.0, likelihood: 7.0, impact: f64::NAN },
        )]);
        let risk = CyberRiskAssessor.assess(&inputs);
        assert!((0.0..=100.0).contains(&risk.score));
    }

    #[test]
    fn stronger_documents_carry_less_risk() {
        let weak = FeatureVector { cyber_strength: 0.0, ..FeatureVector::conservative_defaults() };
        let strong = FeatureVector { cyber_strength: 1.0, ..FeatureVector::conservative_defaults() };
        let a = CyberRiskAssessor.assess(&CyberRiskAssessor::inputs_from_features(&weak));
        let b = CyberRiskAssessor.assess(&CyberRiskAssessor::inputs_from_features(&strong));
        assert!(b.score < a.score);
    }
}
