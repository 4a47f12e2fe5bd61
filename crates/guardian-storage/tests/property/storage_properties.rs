//! Property tests: stored patterns keep their scoring fields through the store.

use chrono::Utc;
use guardian_core::models::{CorrectionRule, LearnedPattern, TopicRule};
use guardian_core::traits::IPatternStore;
use guardian_storage::{InMemoryStore, StorageEngine};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn upsert_count_matches_usage(upserts in 1usize..20) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let memory = InMemoryStore::new();
        let record = LearnedPattern::new(
            "p".into(),
            vec!["quantum".into()],
            CorrectionRule::Topic(TopicRule { topic: "Quantum".into() }),
            Utc::now(),
        )
        .to_record()
        .unwrap();

        for _ in 0..upserts {
            engine.upsert_pattern(&record).unwrap();
            memory.upsert_pattern(&record).unwrap();
        }
        let a = engine.get_pattern("p").unwrap().unwrap();
        let b = memory.get_pattern("p").unwrap().unwrap();
        prop_assert_eq!(a.usage_count, upserts as u64);
        prop_assert_eq!(b.usage_count, upserts as u64);
    }

    #[test]
    fn update_preserves_scores(conf in 0.0f64..=1.0, rate in 0.0f64..=1.0, outcomes in 0u64..1000) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let mut record = LearnedPattern::new(
            "p".into(),
            vec!["privacy".into()],
            CorrectionRule::Topic(TopicRule { topic: "Privacy".into() }),
            Utc::now(),
        )
        .to_record()
        .unwrap();
        engine.upsert_pattern(&record).unwrap();

        record.confidence_score = conf;
        record.success_rate = rate;
        record.outcome_count = outcomes;
        prop_assert!(engine.update_pattern(&record).unwrap());

        let stored = engine.get_pattern("p").unwrap().unwrap();
        prop_assert_eq!(stored.confidence_score, conf);
        prop_assert_eq!(stored.success_rate, rate);
        prop_assert_eq!(stored.outcome_count, outcomes);
    }
}
