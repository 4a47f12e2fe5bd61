use serde::{Deserialize, Serialize};

/// Coverage of expected cybersecurity and ethics provisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub cyber_matches: usize,
    pub cyber_total: usize,
    pub ethics_matches: usize,
    pub ethics_total: usize,
    /// 1 minus the fraction of expected provisions found, in [0, 1].
    pub gap_score: f64,
    /// Expected provisions that were not found, when computed from text.
    #[serde(default)]
    pub missing_provisions: Vec<String>,
}

impl GapReport {
    /// Fraction of provisions found, the complement of `gap_score`.
    pub fn coverage(&self) -> f64 {
        1.0 - self.gap_score
    }
}
