//! Cosine similarity between feature vectors.

use guardian_core::models::FeatureVector;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    /// `(a·b) / (‖a‖‖b‖)` clamped to [0, 1].
    ///
    /// Zero magnitude, mismatched or empty lengths, and non-finite
    /// results all yield 0.
    pub fn cosine(&self, a: &[f64], b: &[f64]) -> f64 {
        if a.is_empty() || a.len() != b.len() {
            return 0.0;
        }
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for (x, y) in a.iter().zip(b) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        let sim = dot / (norm_a * norm_b).sqrt();
        if sim.is_finite() {
            sim.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// `1 − cosine` between two feature vectors, e.g. successive revisions
    /// of the same document.
    pub fn semantic_drift(&self, before: &FeatureVector, after: &FeatureVector) -> f64 {
        1.0 - self.cosine(&before.as_array(), &after.as_array())
    }
}
