use std::collections::HashMap;

/// Confidence in the original extraction of one field: 1.0 when unchanged,
/// 0.0 when nothing was extracted, else the character overlap.
pub fn field_confidence(original: &str, verified: &str) -> f64 {
    if original == verified {
        return 1.0;
    }
    if original.trim().is_empty() {
        return 0.0;
    }
    dice_similarity(original, verified)
}

/// Dice coefficient `2·|A∩B| / (|A|+|B|)` over case-folded character multisets.
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    let a = char_counts(a);
    let b = char_counts(b);
    let total: usize = a.values().sum::<usize>() + b.values().sum::<usize>();
    if total == 0 {
        return 1.0;
    }
    let shared: usize = a
        .iter()
        .map(|(c, n)| b.get(c).map_or(0, |m| (*n).min(*m)))
        .sum();
    (2.0 * shared as f64 / total as f64).clamp(0.0, 1.0)
}

fn char_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in text.chars().flat_map(char::to_lowercase) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_endpoints() {
        assert_eq!(field_confidence("NIST", "NIST"), 1.0);
        assert_eq!(field_confidence("", "NIST"), 0.0);
        assert_eq!(field_confidence("", ""), 1.0);
    }

    #[test]
    fn dice_is_case_insensitive_and_symmetric() {
        assert!((dice_similarity("nist", "NIST") - 1.0).abs() < 1e-12);
        assert!((dice_similarity("ab", "bc") - 0.5).abs() < 1e-12);
        assert_eq!(dice_similarity("ab", "bc"), dice_similarity("bc", "ab"));
        assert_eq!(dice_similarity("abc", "xyz"), 0.0);
    }
}
