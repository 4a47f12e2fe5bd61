use guardian_core::models::{CorrectionRule, OrganizationRule};

use super::{contains_word, finish, literal_trigger, Indicators};

/// Canonical organization name and the phrases that identify it.
pub const ORGANIZATIONS: &[(&str, &[&str])] = &[
    ("NIST", &["nist", "national institute of standards and technology"]),
    ("NSA", &["nsa", "national security agency"]),
    ("CISA", &["cisa", "cybersecurity and infrastructure security agency"]),
    ("DHS", &["dhs", "department of homeland security"]),
    ("DoD", &["dod", "department of defense"]),
    ("EU", &["european union", "european commission"]),
    ("ISO", &["iso/iec", "international organization for standardization"]),
    ("IEEE", &["ieee", "institute of electrical and electronics engineers"]),
    ("UNESCO", &["unesco"]),
    ("OECD", &["oecd", "organisation for economic co-operation and development"]),
    ("White House", &["white house", "executive office of the president", "ostp"]),
];

/// Triggers match as plain substrings when applied, so a pattern needs at
/// least one trigger this long. Bare acronyms ("nsa", "dod") ride along with
/// the long form but never stand alone.
pub const MIN_ANCHOR_CHARS: usize = 5;

/// Alias list for a corrected organization given by name or by any alias.
pub fn aliases_for(value: &str) -> Option<&'static [&'static str]> {
    let value = value.trim().to_lowercase();
    ORGANIZATIONS
        .iter()
        .find(|(name, aliases)| name.to_lowercase() == value || aliases.contains(&value.as_str()))
        .map(|(_, aliases)| *aliases)
}

pub fn mine(corrected: &str, sample: &str) -> Option<Indicators> {
    let lowered = sample.to_lowercase();
    let mut triggers: Vec<String> = aliases_for(corrected)
        .map(|aliases| {
            aliases
                .iter()
                .filter(|a| contains_word(&lowered, a))
                .map(|a| a.to_string())
                .collect()
        })
        .unwrap_or_default();
    triggers.extend(literal_trigger(&lowered, corrected));
    if !triggers.iter().any(|t| t.chars().count() >= MIN_ANCHOR_CHARS) {
        return None;
    }

    finish(
        triggers,
        CorrectionRule::Organization(OrganizationRule {
            organization: corrected.to_string(),
        }),
    )
}
