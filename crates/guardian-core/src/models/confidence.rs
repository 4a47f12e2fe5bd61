use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Confidence score clamped to [0.0, 1.0].
/// Represents how much a learned pattern is trusted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Patterns at or above this are applied to new documents.
    pub const ELIGIBLE: f64 = 0.7;

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check whether the confidence clears the given application threshold.
    pub fn is_eligible(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::ELIGIBLE)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add<f64> for Confidence {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for Confidence {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}
