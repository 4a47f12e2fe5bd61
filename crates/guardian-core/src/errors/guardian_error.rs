use super::{ConfigError, StorageError, ValidationError};

/// Top-level error type for the guardian system.
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("persistence unavailable during {operation}: {reason}")]
    PersistenceUnavailable { operation: String, reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("malformed pattern {pattern_id}: {reason}")]
    MalformedPattern { pattern_id: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GuardianError {
    /// Wrap any store failure as `PersistenceUnavailable` for the given operation.
    pub fn persistence(operation: &str, err: impl std::fmt::Display) -> Self {
        Self::PersistenceUnavailable {
            operation: operation.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Convenience alias.
pub type GuardianResult<T> = Result<T, GuardianError>;
