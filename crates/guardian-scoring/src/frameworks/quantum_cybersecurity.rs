//! QCMEA: quantum cybersecurity maturity on a 1–5 scale.

use std::collections::BTreeMap;

use guardian_core::constants::{QCMEA_MAX_LEVEL, QCMEA_MIN_LEVEL};
use serde::{Deserialize, Serialize};

use super::indicator::{Dimension, Indicator};

pub const DIMENSIONS: [Dimension; 5] = [
    Dimension {
        name: "quantum_awareness",
        weight: 0.2,
        indicator: Indicator::new(
            &["quantum", "qubit", "superposition", "entanglement", "quantum computing"],
            0.1,
            &["quantum threat", "post-quantum", "quantum-safe", "quantum cryptography"],
            0.2,
            0.1,
        ),
    },
    Dimension {
        name: "quantum_threats",
        weight: 0.2,
        indicator: Indicator::new(
            &["quantum threat", "cryptographic vulnerability", "shor algorithm", "grover algorithm"],
            0.25,
            &["quantum risk", "post-quantum transition", "cryptographic agility"],
            0.2,
            0.05,
        ),
    },
    Dimension {
        name: "quantum_planning",
        weight: 0.25,
        indicator: Indicator::new(
            &["quantum roadmap", "migration plan", "quantum strategy", "post-quantum planning"],
            0.3,
            &["quantum preparedness", "cryptographic inventory", "risk assessment"],
            0.25,
            0.1,
        ),
    },
    Dimension {
        name: "quantum_implementation",
        weight: 0.25,
        indicator: Indicator::new(
            &["post-quantum cryptography", "quantum-safe algorithms", "nist approved"],
            0.35,
            &["quantum deployment", "cryptographic migration", "hybrid solutions"],
            0.3,
            0.05,
        ),
    },
    Dimension {
        name: "quantum_adaptation",
        weight: 0.1,
        indicator: Indicator::new(
            &["adaptive", "dynamic quantum", "quantum agility", "continuous monitoring"],
            0.4,
            &["quantum evolution", "emerging threats", "future-proof"],
            0.3,
            0.02,
        ),
    },
];

/// Readiness thresholds for tiers 1 through 5.
pub const LEVEL_THRESHOLDS: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QcmeaAssessment {
    /// Tier in [1, 5].
    pub level: u8,
    /// Weighted readiness in [0, 1].
    pub readiness: f64,
    pub dimensions: BTreeMap<String, f64>,
}

/// Highest tier whose threshold the readiness meets; tier 1 otherwise.
pub fn level_for(readiness: f64) -> u8 {
    let mut level = QCMEA_MIN_LEVEL;
    for (idx, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if readiness >= *threshold {
            level = idx as u8 + 1;
        }
    }
    level.clamp(QCMEA_MIN_LEVEL, QCMEA_MAX_LEVEL)
}
