//! Title categories: a regex that pulls a candidate title out of content,
//! and the literal markers that must be present for it to be tried.

use std::sync::LazyLock;

use guardian_core::models::{CorrectionRule, TitleRule};
use guardian_core::text::prefix_chars;
use regex::Regex;

use super::{finish, Indicators};

/// Longest title a category may extract.
const MAX_TITLE_CHARS: usize = 200;

pub struct TitleCategory {
    pub name: &'static str,
    pub markers: &'static [&'static str],
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! title_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

title_pattern!(
    RE_NIST_SP,
    r"(?im)^[ \t]*((?:NIST[ \t]+)?(?:Special[ \t]+Publication|SP)[ \t]+\d{3}-\d+[^\n]*)$"
);
title_pattern!(RE_EXECUTIVE_ORDER, r"(?im)^[ \t]*(Executive[ \t]+Order[^\n]*)$");
title_pattern!(RE_PUBLIC_LAW, r"(?im)^[ \t]*(Public[ \t]+Law[ \t]+\d+-\d+[^\n]*)$");
title_pattern!(RE_FEDERAL_REGISTER, r"(?im)^[ \t]*(Federal[ \t]+Register[^\n]*)$");
title_pattern!(
    RE_PRESIDENTIAL_DIRECTIVE,
    r"(?im)^[ \t]*((?:Presidential[ \t]+Policy[ \t]+Directive|National[ \t]+Security[ \t]+Memorandum|PPD|NSM)[ \t-]*\d+[^\n]*)$"
);
title_pattern!(RE_TITLE_LABEL, r"(?im)^[ \t]*title[ \t]*:[ \t]*([^\n]+)$");
title_pattern!(RE_MARKDOWN_HEADING, r"(?m)^[ \t]*#[ \t]+([^\n]+)$");

/// Tried in order; the first category whose extraction matches wins.
pub static CATEGORIES: &[TitleCategory] = &[
    TitleCategory {
        name: "nist_special_publication",
        markers: &["special publication", "nist sp", "sp 800-"],
        regex: &RE_NIST_SP,
    },
    TitleCategory {
        name: "executive_order",
        markers: &["executive order"],
        regex: &RE_EXECUTIVE_ORDER,
    },
    TitleCategory {
        name: "public_law",
        markers: &["public law"],
        regex: &RE_PUBLIC_LAW,
    },
    TitleCategory {
        name: "federal_register",
        markers: &["federal register"],
        regex: &RE_FEDERAL_REGISTER,
    },
    TitleCategory {
        name: "presidential_directive",
        markers: &[
            "presidential policy directive",
            "national security memorandum",
            "ppd-",
            "nsm-",
        ],
        regex: &RE_PRESIDENTIAL_DIRECTIVE,
    },
    TitleCategory {
        name: "title_label",
        markers: &["title:"],
        regex: &RE_TITLE_LABEL,
    },
    TitleCategory {
        name: "markdown_heading",
        markers: &["# "],
        regex: &RE_MARKDOWN_HEADING,
    },
];

pub fn category(name: &str) -> Option<&'static TitleCategory> {
    CATEGORIES.iter().find(|c| c.name == name)
}

impl TitleCategory {
    /// Markers present in already-lowercased text.
    pub fn markers_in(&self, lowered: &str) -> Vec<String> {
        self.markers
            .iter()
            .filter(|m| lowered.contains(*m))
            .map(|m| m.to_string())
            .collect()
    }

    /// Candidate titles in document order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let Some(re) = self.regex.as_ref() else {
            return Vec::new();
        };
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| prefix_chars(m.as_str().trim(), MAX_TITLE_CHARS).trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn extract_first(&self, text: &str) -> Option<String> {
        self.extract(text).into_iter().next()
    }
}

pub fn mine(corrected: &str, sample: &str) -> Option<Indicators> {
    let lowered = sample.to_lowercase();
    let target = normalize(corrected);

    CATEGORIES.iter().find_map(|category| {
        let markers = category.markers_in(&lowered);
        if markers.is_empty() {
            return None;
        }
        let overlaps = category.extract(sample).iter().any(|candidate| {
            let candidate = normalize(candidate);
            candidate.contains(&target) || target.contains(&candidate)
        });
        if !overlaps {
            return None;
        }
        finish(
            markers,
            CorrectionRule::Title(TitleRule {
                category: category.name.to_string(),
            }),
        )
    })
}

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
    fn every_category_regex_compiles() {
        for category in CATEGORIES {
            assert!(category.regex.is_some(), "{} failed to compile", category.name);
        }
    }

    #[test]
    fn nist_publication_line_extracted() {
        let text = "Withdrawn draft\nNIST Special Publication 800-53 Rev. 5\nSecurity and Privacy Controls";
        let c = category("nist_special_publication").unwrap();
        assert_eq!(
            c.extract_first(text).as_deref(),
            Some("NIST Special Publication 800-53 Rev. 5")
        );
    }

    #[test]
    fn executive_order_mined_from_matching_line() {
        let sample = "THE WHITE HOUSE\nExecutive Order 14110 on Safe, Secure, and Trustworthy AI\nBy the authority vested in me";
        let found = mine("Executive Order 14110", sample).unwrap();
        assert_eq!(found.triggers, vec!["executive order"]);
        assert_eq!(
            found.rule,
            CorrectionRule::Title(TitleRule {
                category: "executive_order".into()
            })
        );
    }

    #[test]
    fn title_label_and_heading() {
        let found = mine("Zero Trust Strategy", "Title: Zero Trust Strategy\nBody").unwrap();
        assert_eq!(found.triggers, vec!["title:"]);

        let found = mine("Quantum Readiness", "# Quantum Readiness Plan\n\nText").unwrap();
        assert_eq!(
            found.rule,
            CorrectionRule::Title(TitleRule {
                category: "markdown_heading".into()
            })
        );
    }

    #[test]
    fn no_overlap_no_pattern() {
        assert!(mine("Something Else", "Title: Zero Trust Strategy").is_none());
    }
}
