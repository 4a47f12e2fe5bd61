use serde::{Deserialize, Serialize};

use super::defaults;

/// Q-learning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Learning rate (alpha).
    pub alpha: f64,
    /// Discount factor (gamma).
    pub gamma: f64,
    /// States retained before the least recently updated are evicted.
    pub max_states: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_LEARNING_RATE,
            gamma: defaults::DEFAULT_DISCOUNT_FACTOR,
            max_states: defaults::DEFAULT_MAX_STATES,
        }
    }
}
