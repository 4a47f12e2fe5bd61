//! Static-prior Bayesian maturity estimation.
//!
//! `P(M|D) ∝ P(D|M) · P(M)` with fixed priors. The posterior of one call is
//! never fed back as the prior of the next.

use guardian_core::models::{FeatureVector, MaturityDistribution, MaturityLevel, MaturityObservation};

/// Floor applied to every likelihood.
const LIKELIHOOD_FLOOR: f64 = 0.1;

/// Neutral value substituted for a non-finite observation.
const NEUTRAL_OBSERVATION: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaturityEstimator;

impl MaturityEstimator {
    /// `P(D|M)` for one level.
    pub fn likelihood(&self, level: MaturityLevel, obs: &MaturityObservation) -> f64 {
        let s = sanitize(obs.query_success_rate);
        let value = match level {
            MaturityLevel::Initial => 1.0 - s,
            MaturityLevel::Basic => 0.7 - (s - 0.4).abs(),
            MaturityLevel::Intermediate => 0.8 - (s - 0.6).abs(),
            MaturityLevel::Advanced => 0.9 - (s - 0.8).abs(),
            MaturityLevel::Dynamic => {
                s * sanitize(obs.policy_adoption_rate) * sanitize(obs.compliance_score)
            }
        };
        value.max(LIKELIHOOD_FLOOR)
    }

    /// Posterior over the five levels. Uniform if the normalizer is zero.
    pub fn estimate(&self, obs: &MaturityObservation) -> MaturityDistribution {
        let weights = MaturityLevel::ALL.map(|level| self.likelihood(level, obs) * level.prior());
        MaturityDistribution::from_weights(weights)
    }

    /// Observation derived from document features.
    pub fn observation_from_features(features: &FeatureVector) -> MaturityObservation {
        MaturityObservation {
            query_success_rate: features.technical_complexity,
            policy_adoption_rate: features.policy_relevance,
            compliance_score: features.compliance_indicators,
        }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        NEUTRAL_OBSERVATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(s: f64, a: f64, c: f64) -> MaturityObservation {
        MaturityObservation {
            query_success_rate: s,
            policy_adoption_rate: a,
            compliance_score: c,
        }
    }

    #[test]
    fn likelihoods_match_formulas() {
        let est = MaturityEstimator;
        let o = obs(0.6, 0.5, 0.5);
        assert!((est.likelihood(MaturityLevel::Initial, &o) - 0.4).abs() < 1e-12);
        assert!((est.likelihood(MaturityLevel::Basic, &o) - 0.5).abs() < 1e-12);
        assert!((est.likelihood(MaturityLevel::Intermediate, &o) - 0.8).abs() < 1e-12);
        assert!((est.likelihood(MaturityLevel::Advanced, &o) - 0.7).abs() < 1e-12);
        // 0.6 * 0.5 * 0.5 = 0.15
        assert!((est.likelihood(MaturityLevel::Dynamic, &o) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn likelihood_floor_applies() {
        let est = MaturityEstimator;
        let o = obs(1.0, 0.0, 0.0);
        assert_eq!(est.likelihood(MaturityLevel::Initial, &o), 0.1);
        assert_eq!(est.likelihood(MaturityLevel::Dynamic, &o), 0.1);
    }

    #[test]
    fn posterior_is_normalized() {
        let d = MaturityEstimator.estimate(&obs(0.3, 0.2, 0.9));
        assert!(d.is_normalized());
    }

    #[test]
    fn low_success_favors_initial() {
        let d = MaturityEstimator.estimate(&obs(0.0, 0.0, 0.0));
        assert_eq!(d.most_likely(), MaturityLevel::Initial);
    }

    #[test]
    fn estimate_is_stateless() {
        let est = MaturityEstimator;
        let a = est.estimate(&obs(0.8, 0.9, 0.9));
        let _ = est.estimate(&obs(0.1, 0.1, 0.1));
        let b = est.estimate(&obs(0.8, 0.9, 0.9));
        assert_eq!(a, b);
    }

    #[test]
    fn nan_observation_is_neutral() {
        let d = MaturityEstimator.estimate(&obs(f64::NAN, f64::NAN, f64::NAN));
        assert!(d.is_normalized());
        assert_eq!(d, MaturityEstimator.estimate(&obs(0.5, 0.5, 0.5)));
    }
}
