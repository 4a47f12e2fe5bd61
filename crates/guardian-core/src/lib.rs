//! # guardian-core
//!
//! Foundation crate for the guardian policy-assessment system.
//! Defines the domain types, error enums, configuration, and store traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GuardianConfig;
pub use errors::{GuardianError, GuardianResult};
pub use models::{
    ComprehensiveScores, Confidence, FeatureVector, GapReport, LearnedPattern, MaturityDistribution,
    MaturityLevel, Metadata, PatternType, VerificationEvent,
};
