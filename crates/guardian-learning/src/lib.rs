//! # guardian-learning
//!
//! Correction pipeline: validate → hash sample → field diff → per-field
//! confidence → event upsert → indicator mining → pattern upsert.
//! `PatternApplier` replays eligible patterns against new documents.

pub mod analysis;
pub mod applier;
pub mod engine;
pub mod extraction;
pub mod hashing;

pub use applier::PatternApplier;
pub use engine::{LearningStats, MinedPattern, RecordedCorrection, VerificationLearner};
