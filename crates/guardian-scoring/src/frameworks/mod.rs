//! The four assessment frameworks: AI cybersecurity, quantum cybersecurity
//! (QCMEA), AI ethics, and quantum ethics.

pub mod ai_cybersecurity;
pub mod ai_ethics;
pub mod indicator;
pub mod quantum_cybersecurity;
pub mod quantum_ethics;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use indicator::{Dimension, Indicator, IndicatorScore};
pub use quantum_cybersecurity::QcmeaAssessment;

/// Weighted framework result on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkBreakdown {
    pub total: f64,
    /// Weighted contribution of each dimension, 0–100 scale.
    pub dimensions: BTreeMap<String, f64>,
}

impl FrameworkBreakdown {
    /// Total rounded to an integer score.
    pub fn rounded(&self) -> u8 {
        self.total.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkScores {
    pub ai_cybersecurity: FrameworkBreakdown,
    pub quantum_cybersecurity: QcmeaAssessment,
    pub ai_ethics: FrameworkBreakdown,
    pub quantum_ethics: FrameworkBreakdown,
    /// Fraction of all dimensions with at least one keyword hit.
    pub signal_coverage: f64,
}

impl FrameworkScores {
    /// Score all four frameworks over a lowercased analysis window.
    pub fn evaluate(window: &str) -> Self {
        let mut hit_dims = 0usize;
        let mut total_dims = 0usize;
        let mut run = |dims: &[Dimension]| {
            let (sum, breakdown) = weighted(window, dims, &mut hit_dims);
            total_dims += dims.len();
            (sum, breakdown)
        };

        let (ai_cyber, ai_cyber_dims) = run(&ai_cybersecurity::DIMENSIONS);
        let (ai_eth, ai_eth_dims) = run(&ai_ethics::DIMENSIONS);
        let (q_eth, q_eth_dims) = run(&quantum_ethics::DIMENSIONS);
        let (readiness, q_cyber_dims) = run(&quantum_cybersecurity::DIMENSIONS);

        let signal_coverage = if total_dims == 0 {
            0.0
        } else {
            hit_dims as f64 / total_dims as f64
        };

        Self {
            ai_cybersecurity: FrameworkBreakdown {
                total: (ai_cyber * 100.0).clamp(0.0, 100.0),
                dimensions: ai_cyber_dims,
            },
            quantum_cybersecurity: QcmeaAssessment {
                level: quantum_cybersecurity::level_for(readiness),
                readiness: readiness.clamp(0.0, 1.0),
                dimensions: q_cyber_dims,
            },
            ai_ethics: FrameworkBreakdown {
                total: (ai_eth * 100.0).clamp(0.0, 100.0),
                dimensions: ai_eth_dims,
            },
            quantum_ethics: FrameworkBreakdown {
                total: (q_eth * 100.0).clamp(0.0, 100.0),
                dimensions: q_eth_dims,
            },
            signal_coverage,
        }
    }
}

/// Weighted sum of dimension scores, plus the per-dimension breakdown.
fn weighted(
    window: &str,
    dims: &[Dimension],
    hit_dims: &mut usize,
) -> (f64, BTreeMap<String, f64>) {
    let mut sum = 0.0;
    let mut breakdown = BTreeMap::new();
    for dim in dims {
        let s = dim.indicator.evaluate(window);
        if s.hits > 0 {
            *hit_dims += 1;
        }
        let contribution = s.score * dim.weight;
        breakdown.insert(dim.name.to_string(), contribution * 100.0);
        sum += contribution;
    }
    (sum, breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_weights_sum_to_one() {
        for dims in [
            &ai_cybersecurity::DIMENSIONS[..],
            &ai_ethics::DIMENSIONS[..],
            &quantum_ethics::DIMENSIONS[..],
            &quantum_cybersecurity::DIMENSIONS[..],
        ] {
            let total: f64 = dims.iter().map(|d| d.weight).sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_text_scores_baselines() {
        let s = FrameworkScores::evaluate("");
        // 0.3*0.2 + 0.25*0.15 + 0.25*0.25 + 0.2*0.15 = 0.19
        assert!((s.ai_cybersecurity.total - 19.0).abs() < 1e-9);
        assert_eq!(s.quantum_cybersecurity.level, 1);
        assert_eq!(s.signal_coverage, 0.0);
    }

    #[test]
    fn rich_text_scores_higher() {
        let text = "zero trust authentication with multi-factor access control, \
                    end-to-end encryption and key management, anomaly detection, \
                    real-time monitoring, incident response and threat hunting";
        let s = FrameworkScores::evaluate(text);
        assert!(s.ai_cybersecurity.total > 50.0);
        assert!(s.signal_coverage > 0.0);
    }

    #[test]
    fn quantum_program_reaches_higher_tier() {
        let text = "our quantum roadmap and migration plan cover post-quantum cryptography, \
                    quantum-safe algorithms, nist approved schemes, cryptographic migration, \
                    quantum threat analysis of shor algorithm, cryptographic inventory, \
                    quantum agility and continuous monitoring of emerging threats";
        let s = FrameworkScores::evaluate(text);
        assert!(s.quantum_cybersecurity.level >= 4);
    }

    #[test]
    fn fairness_penalizes_negative_terms() {
        let fair = FrameworkScores::evaluate("fairness and equitable treatment");
        let unfair = FrameworkScores::evaluate("fairness and equitable treatment was unfair and biased");
        assert!(unfair.ai_ethics.total < fair.ai_ethics.total);
    }
}
