//! Provision coverage against two fixed provision lists.

use guardian_core::models::GapReport;
use guardian_core::text::prefix_chars;

pub const CYBER_PROVISIONS: [&str; 10] = [
    "access control",
    "authentication",
    "encryption",
    "incident response",
    "vulnerability management",
    "risk assessment",
    "security monitoring",
    "data protection",
    "network security",
    "audit logging",
];

pub const ETHICS_PROVISIONS: [&str; 10] = [
    "transparency",
    "accountability",
    "fairness",
    "bias mitigation",
    "human oversight",
    "privacy",
    "explainability",
    "non-discrimination",
    "informed consent",
    "redress",
];

/// Provision counts for the cyber and ethics lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProvisionTally {
    pub cyber: usize,
    pub ethics: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Full expected tally for the built-in provision lists.
    pub fn expected() -> ProvisionTally {
        ProvisionTally {
            cyber: CYBER_PROVISIONS.len(),
            ethics: ETHICS_PROVISIONS.len(),
        }
    }

    /// `1 − (found / expected)` over both lists. With nothing expected the
    /// gap is maximal (1.0). Found counts never exceed expected ones.
    pub fn gap(&self, found: ProvisionTally, expected: ProvisionTally) -> GapReport {
        let cyber_matches = found.cyber.min(expected.cyber);
        let ethics_matches = found.ethics.min(expected.ethics);
        let total = expected.cyber + expected.ethics;
        let gap_score = if total == 0 {
            1.0
        } else {
            (1.0 - (cyber_matches + ethics_matches) as f64 / total as f64).clamp(0.0, 1.0)
        };
        GapReport {
            cyber_matches,
            cyber_total: expected.cyber,
            ethics_matches,
            ethics_total: expected.ethics,
            gap_score,
            missing_provisions: Vec::new(),
        }
    }

    /// Case-insensitive provision search over `text`, bounded to `max_chars`.
    pub fn analyze(&self, text: &str, max_chars: usize) -> GapReport {
        let lowered = prefix_chars(text, max_chars).to_lowercase();
        let mut missing = Vec::new();
        let mut found = ProvisionTally::default();
        for p in CYBER_PROVISIONS {
            if lowered.contains(p) {
                found.cyber += 1;
            } else {
                missing.push(p.to_string());
            }
        }
        for p in ETHICS_PROVISIONS {
            if lowered.contains(p) {
                found.ethics += 1;
            } else {
                missing.push(p.to_string());
            }
        }
        let mut report = self.gap(found, Self::expected());
        report.missing_provisions = missing;
        report
    }
}
