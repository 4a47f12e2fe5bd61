//! AI cybersecurity maturity, 0–100.

use super::indicator::{Dimension, Indicator};

pub const DIMENSIONS: [Dimension; 4] = [
    Dimension {
        name: "authentication_access",
        weight: 0.3,
        indicator: Indicator::new(
            &["authentication", "multi-factor", "identity verification", "access control"],
            0.15,
            &["zero trust", "adaptive authentication", "biometric", "federated identity"],
            0.25,
            0.2,
        ),
    },
    Dimension {
        name: "encryption_protection",
        weight: 0.25,
        indicator: Indicator::new(
            &["encryption", "cryptography", "data protection", "secure communication"],
            0.15,
            &["end-to-end encryption", "homomorphic encryption", "key management"],
            0.25,
            0.15,
        ),
    },
    Dimension {
        name: "monitoring_detection",
        weight: 0.25,
        indicator: Indicator::new(
            &["monitoring", "detection", "surveillance", "threat intelligence"],
            0.12,
            &["anomaly detection", "behavioral analysis", "real-time monitoring", "siem"],
            0.2,
            0.25,
        ),
    },
    Dimension {
        name: "incident_response",
        weight: 0.2,
        indicator: Indicator::new(
            &["incident response", "disaster recovery", "business continuity", "crisis management"],
            0.2,
            &["automated response", "threat hunting", "forensics", "recovery testing"],
            0.25,
            0.15,
        ),
    },
];
