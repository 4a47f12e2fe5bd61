//! Error handling for guardian.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod guardian_error;
pub mod storage_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use guardian_error::{GuardianError, GuardianResult};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
