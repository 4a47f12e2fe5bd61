use guardian_core::models::*;
use proptest::prelude::*;

#[test]
fn conservative_defaults_are_mid_range_for_strengths() {
    let f = FeatureVector::conservative_defaults();
    assert_eq!(f.cyber_strength, 0.5);
    assert_eq!(f.ethics_strength, 0.5);
    assert_eq!(f.policy_relevance, 0.3);
    assert_eq!(f.compliance_indicators, 0.4);
}

#[test]
fn pattern_type_parses_field_names() {
    assert_eq!(PatternType::for_field("topic"), Some(PatternType::Topic));
    assert_eq!(PatternType::for_field("organization"), Some(PatternType::Organization));
    assert_eq!(PatternType::for_field("date"), None);
}

#[test]
fn correction_kind_serializes_snake_case() {
    let json = serde_json::to_string(&CorrectionKind::MissingFieldAdded).unwrap();
    assert_eq!(json, "\"missing_field_added\"");
}

// ── Distribution invariants ──────────────────────────────────────────────

proptest! {
    #[test]
    fn from_weights_always_normalized(weights in prop::array::uniform5(-1.0f64..10.0)) {
        let d = MaturityDistribution::from_weights(weights);
        prop_assert!(d.is_normalized());
        for (_, p) in d.iter() {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn clamped_features_stay_in_unit_interval(values in prop::array::uniform7(-5.0f64..5.0)) {
        let f = FeatureVector {
            technical_complexity: values[0],
            policy_relevance: values[1],
            compliance_indicators: values[2],
            cyber_strength: values[3],
            ethics_strength: values[4],
            ai_relevance: values[5],
            quantum_relevance: values[6],
        }
        .clamped();
        for v in f.as_array() {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
