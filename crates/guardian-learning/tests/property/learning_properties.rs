//! Property tests for field diffing and confidence.

use guardian_learning::analysis::{classify, dice_similarity, field_confidence};
use proptest::prelude::*;

proptest! {
    #[test]
    fn identical_values_have_no_correction(value in ".{0,40}") {
        prop_assert!(classify(&value, &value).is_none());
        prop_assert_eq!(field_confidence(&value, &value), 1.0);
    }

    #[test]
    fn different_values_always_classified(a in "[a-zA-Z ]{0,30}", b in "[a-zA-Z ]{0,30}") {
        prop_assume!(a != b);
        prop_assert!(classify(&a, &b).is_some());
    }

    #[test]
    fn confidence_in_unit_range(a in ".{0,40}", b in ".{0,40}") {
        let c = field_confidence(&a, &b);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn dice_symmetric(a in "[a-z]{0,20}", b in "[a-z]{0,20}") {
        prop_assert!((dice_similarity(&a, &b) - dice_similarity(&b, &a)).abs() < 1e-12);
    }
}
