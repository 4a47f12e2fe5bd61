//! Text helpers shared by the scoring and learning pipelines.

/// The first `max_chars` characters of `text`, cut on a char boundary.
pub fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Number of `terms` occurring as substrings of `haystack`.
/// Each term counts once regardless of how often it occurs.
pub fn count_present(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| haystack.contains(*t)).count()
}

/// Whether any of `terms` occurs in `haystack`.
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(prefix_chars("héllo", 2), "hé");
        assert_eq!(prefix_chars("abc", 10), "abc");
        assert_eq!(prefix_chars("", 3), "");
        assert_eq!(prefix_chars("abc", 0), "");
    }

    #[test]
    fn counts_each_term_once() {
        assert_eq!(count_present("policy policy regulation", &["policy", "regulation", "x"]), 2);
        assert!(contains_any("zero trust", &["trust"]));
        assert!(!contains_any("zero", &[]));
    }
}
