use serde::{Deserialize, Serialize};

use super::{FeatureVector, GapReport, MaturityDistribution};

/// Full result of assessing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveScores {
    /// 0–100.
    pub ai_cybersecurity_score: u8,
    /// QCMEA tier, 1–5.
    pub quantum_cybersecurity_score: u8,
    /// 0–100.
    pub ai_ethics_score: u8,
    /// 0–100.
    pub quantum_ethics_score: u8,
    pub maturity_distribution: MaturityDistribution,
    /// Gap score in [0, 1].
    pub policy_gap: f64,
    /// 0–100.
    pub policy_effectiveness: f64,
    /// 0–100.
    pub stress_testing_score: f64,
    /// 0–100.
    pub overall_score: f64,
    pub cyber_risk_score: f64,
    pub ethics_risk_score: f64,
    pub features: FeatureVector,
    pub gap_report: GapReport,
}
