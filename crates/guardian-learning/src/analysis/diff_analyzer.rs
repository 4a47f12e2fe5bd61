//! Classify how each verified field differs from the original extraction.

use guardian_core::models::{CorrectionKind, FieldCorrection, Metadata};

/// Classify a single field change. `None` when the values are identical.
///
/// Checks run in order: empty original, empty verified, formatting-only
/// difference, expansion, truncation, and finally replacement.
pub fn classify(original: &str, verified: &str) -> Option<CorrectionKind> {
    if original == verified {
        return None;
    }
    if original.trim().is_empty() {
        return Some(CorrectionKind::MissingFieldAdded);
    }
    if verified.trim().is_empty() {
        return Some(CorrectionKind::IncorrectFieldRemoved);
    }

    let orig_norm = normalize(original);
    let ver_norm = normalize(verified);
    if orig_norm == ver_norm {
        return Some(CorrectionKind::FieldReformatted);
    }
    if ver_norm.len() > orig_norm.len() && ver_norm.contains(&orig_norm) {
        return Some(CorrectionKind::FieldExpanded);
    }
    if orig_norm.len() > ver_norm.len() && orig_norm.contains(&ver_norm) {
        return Some(CorrectionKind::FieldTruncated);
    }
    Some(CorrectionKind::FieldReplaced)
}

/// Diff every field present in `verified` against `original`.
/// A field missing from `original` compares as empty. Output follows
/// the verified map's key order.
pub fn diff_fields(original: &Metadata, verified: &Metadata) -> Vec<FieldCorrection> {
    verified
        .iter()
        .filter_map(|(field, corrected)| {
            let before = original.get(field).map(String::as_str).unwrap_or("");
            classify(before, corrected).map(|kind| FieldCorrection {
                field: field.clone(),
                kind,
                original: before.to_string(),
                corrected: corrected.clone(),
            })
        })
        .collect()
}

/// Lowercase and collapse whitespace.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_order() {
        assert_eq!(classify("same", "same"), None);
        assert_eq!(classify("", "AI"), Some(CorrectionKind::MissingFieldAdded));
        assert_eq!(classify("AI", ""), Some(CorrectionKind::IncorrectFieldRemoved));
        assert_eq!(classify("nist", "NIST"), Some(CorrectionKind::FieldReformatted));
        assert_eq!(
            classify("Risk Framework", "AI Risk  Framework 1.0"),
            Some(CorrectionKind::FieldExpanded)
        );
        assert_eq!(
            classify("AI Risk Management Framework", "risk management"),
            Some(CorrectionKind::FieldTruncated)
        );
        assert_eq!(classify("General", "AI"), Some(CorrectionKind::FieldReplaced));
    }

    #[test]
    fn whitespace_only_original_counts_as_missing() {
        assert_eq!(classify("   ", "NIST"), Some(CorrectionKind::MissingFieldAdded));
    }

    #[test]
    fn diff_skips_unchanged_and_ignores_original_only_fields() {
        let original = Metadata::from([
            ("title".to_string(), "Framework".to_string()),
            ("topic".to_string(), "General".to_string()),
            ("notes".to_string(), "dropped".to_string()),
        ]);
        let verified = Metadata::from([
            ("title".to_string(), "Framework".to_string()),
            ("topic".to_string(), "AI".to_string()),
            ("organization".to_string(), "NIST".to_string()),
        ]);

        let diff = diff_fields(&original, &verified);
        let fields: Vec<&str> = diff.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["organization", "topic"]);
        assert_eq!(diff[0].kind, CorrectionKind::MissingFieldAdded);
        assert_eq!(diff[1].kind, CorrectionKind::FieldReplaced);
        assert_eq!(diff[1].original, "General");
    }
}
