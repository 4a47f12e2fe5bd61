//! # guardian-optimizer
//!
//! Q-learning refinement of policy recommendations, driven by external
//! outcome rewards:
//!
//! `Q(s,a) ← Q(s,a) + α[R + γ·max_a' Q(s',a') − Q(s,a)]`

pub mod optimizer;
pub mod q_table;

pub use optimizer::{PolicyOptimizer, QUpdateOutcome};
pub use q_table::QTable;
