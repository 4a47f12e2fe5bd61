//! Quantum ethics, 0–100.

use super::indicator::{Dimension, Indicator};

pub const DIMENSIONS: [Dimension; 4] = [
    Dimension {
        name: "quantum_advantage_equity",
        weight: 0.3,
        indicator: Indicator::new(
            &["equitable access", "quantum divide", "fair distribution", "inclusive quantum"],
            0.3,
            &["quantum advantage", "quantum supremacy", "competitive advantage"],
            0.15,
            0.1,
        ),
    },
    Dimension {
        name: "quantum_privacy_protection",
        weight: 0.25,
        indicator: Indicator::new(
            &["quantum privacy", "private quantum computing", "quantum anonymity"],
            0.25,
            &["quantum encryption", "quantum key distribution", "secure quantum"],
            0.2,
            0.15,
        ),
    },
    Dimension {
        name: "quantum_security_standards",
        weight: 0.25,
        indicator: Indicator::new(
            &["quantum security standards", "post-quantum standards", "nist quantum"],
            0.3,
            &["quantum best practices", "security guidelines", "quantum protocols"],
            0.2,
            0.1,
        ),
    },
    Dimension {
        name: "quantum_access_fairness",
        weight: 0.2,
        indicator: Indicator::new(
            &["quantum access", "democratizing quantum", "quantum for all"],
            0.25,
            &["equitable quantum", "inclusive quantum", "quantum equity"],
            0.25,
            0.08,
        ),
    },
];
