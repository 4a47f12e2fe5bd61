//! AI ethics, 0–100. Four equally weighted dimensions.

use super::indicator::{Dimension, Indicator};

pub const DIMENSIONS: [Dimension; 4] = [
    Dimension {
        name: "fairness_bias",
        weight: 0.25,
        indicator: Indicator::new(
            &["bias", "fairness", "discrimination", "equitable", "inclusive", "diverse", "equal"],
            0.15,
            &[],
            0.0,
            0.3,
        )
        .with_negative(&["biased", "unfair", "discriminatory", "exclusive"], 0.1),
    },
    Dimension {
        name: "transparency_explainability",
        weight: 0.25,
        indicator: Indicator::new(
            &["transparent", "explainable", "interpretable", "accountable", "traceable", "auditable"],
            0.12,
            &["explain", "reasoning", "decision-making", "interpretation", "clarity"],
            0.1,
            0.25,
        ),
    },
    Dimension {
        name: "accountability_governance",
        weight: 0.25,
        indicator: Indicator::new(
            &["accountability", "governance", "oversight", "responsibility", "compliance", "audit"],
            0.15,
            &["policy", "framework", "guidelines", "standards", "controls", "procedures"],
            0.08,
            0.2,
        ),
    },
    Dimension {
        name: "privacy_security",
        weight: 0.25,
        indicator: Indicator::new(
            &["privacy", "confidentiality", "data protection", "personal data", "anonymization"],
            0.15,
            &["security", "encryption", "access control", "authentication", "authorization"],
            0.12,
            0.25,
        ),
    },
];
