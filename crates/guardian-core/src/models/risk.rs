use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Composite cyber or ethics risk on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    /// Per-component contribution before scaling, keyed by component name.
    pub contributions: BTreeMap<String, f64>,
}

impl RiskAssessment {
    pub fn new(score: f64, contributions: BTreeMap<String, f64>) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        Self { score, contributions }
    }
}
