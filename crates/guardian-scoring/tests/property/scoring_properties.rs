use std::collections::BTreeMap;

use guardian_core::models::MaturityObservation;
use guardian_scoring::*;
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = CyberCategory> {
    prop_oneof![
        Just(CyberCategory::Authentication),
        Just(CyberCategory::Encryption),
        Just(CyberCategory::AccessControl),
        Just(CyberCategory::Monitoring),
    ]
}

// ── Feature extraction never leaves [0, 1] ───────────────────────────────

proptest! {
    #[test]
    fn features_in_unit_interval(text in ".{0,400}", title in ".{0,40}") {
        let f = FeatureExtractor::default().extract(&text, Some(&title));
        for v in f.as_array() {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn maturity_sums_to_one(s in -1.0f64..2.0, a in -1.0f64..2.0, c in -1.0f64..2.0) {
        let d = MaturityEstimator.estimate(&MaturityObservation {
            query_success_rate: s,
            policy_adoption_rate: a,
            compliance_score: c,
        });
        prop_assert!((d.total() - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn cyber_risk_bounded(
        entries in prop::collection::vec((arb_category(), -10.0f64..10.0, -2.0f64..2.0, -2.0f64..2.0), 0..6)
    ) {
        let inputs: BTreeMap<_, _> = entries
            .into_iter()
            .map(|(c, v, l, i)| (c, CyberRiskInput { vulnerability: v, likelihood: l, impact: i }))
            .collect();
        let score = CyberRiskAssessor.assess(&inputs).score;
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn ethics_risk_bounded(t in -2.0f64..2.0, b in -2.0f64..2.0, a in -2.0f64..2.0) {
        let score = EthicsRiskAssessor
            .assess(&EthicsRiskInput { transparency: t, bias_factor: b, autonomy_risk: a })
            .score;
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn gap_bounded(fc in 0usize..30, fe in 0usize..30, ec in 0usize..30, ee in 0usize..30) {
        let r = GapAnalyzer.gap(
            ProvisionTally { cyber: fc, ethics: fe },
            ProvisionTally { cyber: ec, ethics: ee },
        );
        prop_assert!((0.0..=1.0).contains(&r.gap_score));
    }

    #[test]
    fn qcmea_level_is_a_tier(text in "[a-z \\-]{0,300}") {
        let s = ScoringEngine::default().assess(&text, "");
        prop_assert!((1..=5).contains(&s.quantum_cybersecurity_score));
        prop_assert!((0.0..=100.0).contains(&s.overall_score));
    }

    #[test]
    fn cosine_self_is_one(v in prop::collection::vec(0.0f64..1.0, 1..16)) {
        prop_assume!(v.iter().any(|x| *x > 0.0));
        let c = SimilarityEngine.cosine(&v, &v);
        prop_assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_bounded(pairs in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..16)) {
        let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let c = SimilarityEngine.cosine(&a, &b);
        prop_assert!((0.0..=1.0).contains(&c));
    }
}
