//! Author labels: the phrase that introduces an author name in content.

use std::sync::LazyLock;

use guardian_core::models::{AuthorRule, CorrectionRule};
use regex::Regex;

use super::{finish, Indicators};

/// (rule label, phrase). Every phrase is specific enough to act as a trigger
/// on its own; a bare "by" would match almost any English text.
pub const LABELS: &[(&str, &str)] = &[
    ("prepared_by", "prepared by"),
    ("written_by", "written by"),
    ("authored_by", "authored by"),
    ("author", "author"),
];

/// Up to five capitalised name tokens.
const NAME_PATTERN: &str = r"([A-Z][A-Za-z.'\-]*(?:[ \t]+[A-Z][A-Za-z.'\-]*){0,4})";

fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Name extractors per label, compiled once.
static EXTRACTORS: LazyLock<Vec<(&'static str, Option<Regex>)>> = LazyLock::new(|| {
    LABELS
        .iter()
        .map(|(label, phrase)| {
            let pattern = format!(
                r"\b(?i:{})[ \t]*:?[ \t]*{NAME_PATTERN}",
                phrase_pattern(phrase)
            );
            (*label, Regex::new(&pattern).ok())
        })
        .collect()
});

pub fn phrase_for(label: &str) -> Option<&'static str> {
    LABELS.iter().find(|(l, _)| *l == label).map(|(_, p)| *p)
}

/// First author name introduced by `label` in `text`.
pub fn extract(label: &str, text: &str) -> Option<String> {
    let (_, re) = EXTRACTORS.iter().find(|(l, _)| *l == label)?;
    let caps = re.as_ref()?.captures(text)?;
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

pub fn mine(corrected: &str, sample: &str) -> Option<Indicators> {
    let author = regex::escape(corrected.trim());
    LABELS.iter().find_map(|(label, phrase)| {
        let pattern = format!(r"(?i)\b{}[ \t]*:?\s*{author}", phrase_pattern(phrase));
        let re = Regex::new(&pattern).ok()?;
        if !re.is_match(sample) {
            return None;
        }
        finish(
            vec![phrase.to_string()],
            CorrectionRule::Author(AuthorRule {
                label: label.to_string(),
            }),
        )
    })
}
