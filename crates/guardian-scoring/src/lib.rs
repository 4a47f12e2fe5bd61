//! # guardian-scoring
//!
//! Deterministic scoring of technology-policy documents.
//!
//! `text → FeatureExtractor → {maturity, risk, gap, effectiveness, frameworks} → ComprehensiveScores`
//!
//! Every scorer is pure and fail-open: missing or degenerate input resolves
//! to a documented neutral value, never an error.

pub mod effectiveness;
pub mod engine;
pub mod ensemble;
pub mod features;
pub mod frameworks;
pub mod gap;
pub mod maturity;
pub mod risk;
pub mod similarity;

pub use effectiveness::{EffectivenessInputs, EffectivenessScorer, StressInputs};
pub use engine::ScoringEngine;
pub use ensemble::{Ensemble, EnsembleResult, Scorer, ScorerOutput};
pub use features::FeatureExtractor;
pub use frameworks::FrameworkScores;
pub use gap::{GapAnalyzer, ProvisionTally};
pub use maturity::MaturityEstimator;
pub use risk::{CyberCategory, CyberRiskAssessor, CyberRiskInput, EthicsRiskAssessor, EthicsRiskInput};
pub use similarity::SimilarityEngine;
