//! Confidence-weighted consensus over independent scorers.
//!
//! Each scorer reports per-metric scores plus a confidence. A scorer's
//! weight is `reliability × confidence`; each metric's consensus is the
//! weighted mean over the scorers that report it.

pub mod scorers;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use scorers::{FeatureDensityScorer, FrameworkScorer};

/// Per-metric scores (0–100) and the scorer's confidence in them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScorerOutput {
    pub scores: BTreeMap<String, f64>,
    pub confidence: f64,
}

/// A source of document scores.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &str;
    /// Static trust in this scorer, in [0, 1].
    fn reliability(&self) -> f64;
    fn score(&self, content: &str, title: &str) -> ScorerOutput;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnsembleResult {
    pub scores: BTreeMap<String, f64>,
    /// Mean of the per-metric consensus scores.
    pub consensus_score: f64,
    /// `min(Σ weights / scorer count, 1)`.
    pub confidence: f64,
    pub contributors: Vec<String>,
}

/// An ordered set of scorers.
#[derive(Default)]
pub struct Ensemble {
    scorers: Vec<Box<dyn Scorer>>,
}

impl Ensemble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorers.push(scorer);
        self
    }

    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }

    /// Run every scorer and aggregate.
    pub fn evaluate(&self, content: &str, title: &str) -> EnsembleResult {
        let outputs: Vec<(String, f64, ScorerOutput)> = self
            .scorers
            .iter()
            .map(|s| (s.name().to_string(), s.reliability(), s.score(content, title)))
            .collect();
        Self::aggregate(&outputs)
    }

    /// Aggregate `(name, reliability, output)` triples.
    /// No input, or zero total weight, yields an empty result at confidence 0.
    pub fn aggregate(outputs: &[(String, f64, ScorerOutput)]) -> EnsembleResult {
        if outputs.is_empty() {
            return EnsembleResult::default();
        }

        let mut weighted_sums: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
        let mut total_weight = 0.0;
        let mut contributors = Vec::new();

        for (name, reliability, output) in outputs {
            let weight = unit(*reliability) * unit(output.confidence);
            if weight <= 0.0 {
                continue;
            }
            total_weight += weight;
            contributors.push(name.clone());
            for (metric, score) in &output.scores {
                if !score.is_finite() {
                    continue;
                }
                let entry = weighted_sums.entry(metric.as_str()).or_insert((0.0, 0.0));
                entry.0 += score * weight;
                entry.1 += weight;
            }
        }

        if total_weight <= 0.0 {
            return EnsembleResult::default();
        }

        let scores: BTreeMap<String, f64> = weighted_sums
            .into_iter()
            .filter(|(_, (_, w))| *w > 0.0)
            .map(|(metric, (sum, w))| (metric.to_string(), sum / w))
            .collect();
        let consensus_score = if scores.is_empty() {
            0.0
        } else {
            scores.values().sum::<f64>() / scores.len() as f64
        };

        EnsembleResult {
            scores,
            consensus_score,
            confidence: (total_weight / outputs.len() as f64).min(1.0),
            contributors,
        }
    }
}

fn unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
