use serde::{Deserialize, Serialize};

/// Normalized signal set derived from document text.
///
/// Every field lies in [0, 1]. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub technical_complexity: f64,
    pub policy_relevance: f64,
    pub compliance_indicators: f64,
    pub cyber_strength: f64,
    pub ethics_strength: f64,
    pub ai_relevance: f64,
    pub quantum_relevance: f64,
}

impl FeatureVector {
    /// Number of dimensions returned by [`FeatureVector::as_array`].
    pub const DIMENSIONS: usize = 7;

    /// Defaults for input too short to analyze.
    ///
    /// Strength fields sit mid-range so that risk scores do not read an
    /// unanalyzable document as either well protected or wide open.
    pub fn conservative_defaults() -> Self {
        Self {
            technical_complexity: 0.5,
            policy_relevance: 0.3,
            compliance_indicators: 0.4,
            cyber_strength: 0.5,
            ethics_strength: 0.5,
            ai_relevance: 0.0,
            quantum_relevance: 0.0,
        }
    }

    /// Dense representation used for similarity comparisons.
    pub fn as_array(&self) -> [f64; Self::DIMENSIONS] {
        [
            self.technical_complexity,
            self.policy_relevance,
            self.compliance_indicators,
            self.cyber_strength,
            self.ethics_strength,
            self.ai_relevance,
            self.quantum_relevance,
        ]
    }

    /// Copy with every field clamped to [0, 1]; NaN becomes 0.
    pub fn clamped(self) -> Self {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            technical_complexity: c(self.technical_complexity),
            policy_relevance: c(self.policy_relevance),
            compliance_indicators: c(self.compliance_indicators),
            cyber_strength: c(self.cyber_strength),
            ethics_strength: c(self.ethics_strength),
            ai_relevance: c(self.ai_relevance),
            quantum_relevance: c(self.quantum_relevance),
        }
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::conservative_defaults()
    }
}
