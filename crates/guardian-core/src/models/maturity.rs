use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MATURITY_LEVEL_COUNT, PROBABILITY_EPSILON};

/// One of the five maturity levels of the Bayesian model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Initial,
    Basic,
    Intermediate,
    Advanced,
    Dynamic,
}

impl MaturityLevel {
    pub const ALL: [MaturityLevel; MATURITY_LEVEL_COUNT] = [
        Self::Initial,
        Self::Basic,
        Self::Intermediate,
        Self::Advanced,
        Self::Dynamic,
    ];

    /// Fixed prior P(M). Priors sum to 1.
    pub fn prior(self) -> f64 {
        match self {
            Self::Initial => 0.40,
            Self::Basic => 0.30,
            Self::Intermediate => 0.20,
            Self::Advanced => 0.08,
            Self::Dynamic => 0.02,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed signals feeding the maturity likelihoods. Each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityObservation {
    pub query_success_rate: f64,
    pub policy_adoption_rate: f64,
    pub compliance_score: f64,
}

/// Posterior belief over the five maturity levels.
///
/// Probabilities always sum to 1 within [`PROBABILITY_EPSILON`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaturityDistribution {
    probabilities: BTreeMap<MaturityLevel, f64>,
}

impl MaturityDistribution {
    /// 0.2 for every level.
    pub fn uniform() -> Self {
        let p = 1.0 / MATURITY_LEVEL_COUNT as f64;
        Self {
            probabilities: MaturityLevel::ALL.iter().map(|l| (*l, p)).collect(),
        }
    }

    /// Normalize unnormalized weights (indexed like [`MaturityLevel::ALL`]).
    /// Falls back to uniform if the normalizer is zero or not finite.
    pub fn from_weights(weights: [f64; MATURITY_LEVEL_COUNT]) -> Self {
        let sanitized = weights.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let total: f64 = sanitized.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Self::uniform();
        }
        Self {
            probabilities: MaturityLevel::ALL
                .iter()
                .zip(sanitized)
                .map(|(level, w)| (*level, w / total))
                .collect(),
        }
    }

    pub fn probability(&self, level: MaturityLevel) -> f64 {
        self.probabilities.get(&level).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= PROBABILITY_EPSILON
    }

    /// Level with the highest posterior; ties resolve to the lower level.
    pub fn most_likely(&self) -> MaturityLevel {
        let mut best = MaturityLevel::Initial;
        let mut best_p = f64::MIN;
        for level in MaturityLevel::ALL {
            let p = self.probability(level);
            if p > best_p {
                best = level;
                best_p = p;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaturityLevel, f64)> + '_ {
        self.probabilities.iter().map(|(l, p)| (*l, *p))
    }
}

impl Default for MaturityDistribution {
    fn default() -> Self {
        Self::uniform()
    }
}
