//! Configuration for every guardian subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`GUARDIAN_*`)
//! 2. TOML file passed to [`GuardianConfig::load`]
//! 3. Compiled defaults ([`defaults`])

pub mod defaults;
pub mod learning_config;
pub mod observability_config;
pub mod optimizer_config;
pub mod scoring_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use learning_config::LearningConfig;
pub use observability_config::ObservabilityConfig;
pub use optimizer_config::OptimizerConfig;
pub use scoring_config::ScoringConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardianConfig {
    pub scoring: ScoringConfig,
    pub learning: LearningConfig,
    pub optimizer: OptimizerConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl GuardianConfig {
    /// Load a TOML file, apply `GUARDIAN_*` environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with overrides drawn from `lookup` instead of
    /// the process environment.
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: GuardianConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `GUARDIAN_*` overrides from an arbitrary lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_f64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());
        let parse_usize = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        if let Some(v) = parse_usize("GUARDIAN_SCORING_CONTENT_PREFIX_CHARS") {
            self.scoring.content_prefix_chars = v;
        }
        if let Some(v) = parse_usize("GUARDIAN_LEARNING_CONTENT_SAMPLE_CHARS") {
            self.learning.content_sample_chars = v;
        }
        if let Some(v) = parse_f64("GUARDIAN_LEARNING_MIN_PATTERN_CONFIDENCE") {
            self.learning.min_pattern_confidence = v;
        }
        if let Some(v) = parse_usize("GUARDIAN_LEARNING_MAX_PATTERNS") {
            self.learning.max_patterns = v;
        }
        if let Some(v) = parse_f64("GUARDIAN_OPTIMIZER_ALPHA") {
            self.optimizer.alpha = v;
        }
        if let Some(v) = parse_f64("GUARDIAN_OPTIMIZER_GAMMA") {
            self.optimizer.gamma = v;
        }
        if let Some(v) = parse_usize("GUARDIAN_OPTIMIZER_MAX_STATES") {
            self.optimizer.max_states = v;
        }
        if let Some(v) = lookup("GUARDIAN_DB_PATH").filter(|v| !v.trim().is_empty()) {
            self.storage.db_path = Some(v);
        }
        if let Some(v) = lookup("GUARDIAN_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(field: &str, message: &str) -> ConfigError {
            ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            }
        }

        let unit_interval = [
            ("learning.min_pattern_confidence", self.learning.min_pattern_confidence),
            ("learning.trigger_match_ratio", self.learning.trigger_match_ratio),
            ("learning.confirm_boost", self.learning.confirm_boost),
            ("learning.reject_penalty", self.learning.reject_penalty),
        ];
        for (field, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(fail(field, "must be between 0.0 and 1.0"));
            }
        }

        let open_unit_interval = [
            ("optimizer.alpha", self.optimizer.alpha),
            ("optimizer.gamma", self.optimizer.gamma),
        ];
        for (field, value) in open_unit_interval {
            if !(value > 0.0 && value <= 1.0) {
                return Err(fail(field, "must be in (0.0, 1.0]"));
            }
        }

        let non_zero = [
            ("scoring.content_prefix_chars", self.scoring.content_prefix_chars),
            ("learning.content_sample_chars", self.learning.content_sample_chars),
            ("learning.max_patterns", self.learning.max_patterns),
            ("optimizer.max_states", self.optimizer.max_states),
            ("storage.read_pool_size", self.storage.read_pool_size),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(fail(field, "must be greater than 0"));
            }
        }

        Ok(())
    }
}
