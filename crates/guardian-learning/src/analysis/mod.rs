//! Field-level comparison of original and verified metadata.

pub mod confidence;
pub mod diff_analyzer;

pub use confidence::{dice_similarity, field_confidence};
pub use diff_analyzer::{classify, diff_fields};
