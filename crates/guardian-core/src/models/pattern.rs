use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Confidence;
use crate::errors::{GuardianError, GuardianResult};

/// Metadata field a learned pattern corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Title,
    Author,
    Organization,
    Topic,
}

impl PatternType {
    pub const ALL: [PatternType; 4] = [Self::Title, Self::Author, Self::Organization, Self::Topic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Organization => "organization",
            Self::Topic => "topic",
        }
    }

    /// Confidence assigned when a pattern of this type is first mined.
    pub fn initial_confidence(self) -> f64 {
        match self {
            Self::Title => 0.75,
            Self::Author => 0.78,
            Self::Topic => 0.80,
            Self::Organization => 0.85,
        }
    }

    /// Pattern type for a metadata field name, if the field is learnable.
    pub fn for_field(field: &str) -> Option<Self> {
        field.parse().ok()
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "organization" => Ok(Self::Organization),
            "topic" => Ok(Self::Topic),
            other => Err(format!("unknown pattern type: {other}")),
        }
    }
}

/// Re-run the title extractor for one title category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleRule {
    pub category: String,
}

/// Set the topic to a fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicRule {
    pub topic: String,
}

/// Read the author that follows a label such as "prepared by".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorRule {
    pub label: String,
}

/// Set the organization to a canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationRule {
    pub organization: String,
}

/// Typed correction payload, discriminated by `kind` in its JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrectionRule {
    Title(TitleRule),
    Author(AuthorRule),
    Organization(OrganizationRule),
    Topic(TopicRule),
}

impl CorrectionRule {
    pub fn pattern_type(&self) -> PatternType {
        match self {
            Self::Title(_) => PatternType::Title,
            Self::Author(_) => PatternType::Author,
            Self::Organization(_) => PatternType::Organization,
            Self::Topic(_) => PatternType::Topic,
        }
    }

    pub fn to_json(&self) -> GuardianResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> GuardianResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Learned pattern as persisted. The rule stays raw JSON so that one
/// malformed row never prevents the others from loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub pattern_id: String,
    pub pattern_type: String,
    pub trigger_conditions: Vec<String>,
    pub rule_json: String,
    pub confidence_score: f64,
    pub usage_count: u64,
    pub success_rate: f64,
    pub outcome_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl PatternRecord {
    /// Ranking used by the capacity sweep: weakest first.
    pub fn retention_score(&self) -> f64 {
        self.confidence_score * self.success_rate
    }
}

/// Result of upserting a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternUpsert {
    Created,
    Reinforced { usage_count: u64 },
}

/// Reusable, confidence-scored correction rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub pattern_id: String,
    pub pattern_type: PatternType,
    pub trigger_conditions: Vec<String>,
    pub correction_rule: CorrectionRule,
    pub confidence: Confidence,
    pub usage_count: u64,
    pub success_rate: f64,
    pub outcome_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl LearnedPattern {
    /// A freshly mined pattern at its type's initial confidence.
    pub fn new(
        pattern_id: String,
        trigger_conditions: Vec<String>,
        correction_rule: CorrectionRule,
        now: DateTime<Utc>,
    ) -> Self {
        let pattern_type = correction_rule.pattern_type();
        Self {
            pattern_id,
            pattern_type,
            trigger_conditions,
            correction_rule,
            confidence: Confidence::new(pattern_type.initial_confidence()),
            usage_count: 1,
            success_rate: 1.0,
            outcome_count: 0,
            created_at: now,
            last_updated: now,
        }
    }

    /// Decode a stored record, rejecting unknown types, undecodable rules,
    /// rules whose kind disagrees with the type, and empty trigger lists.
    pub fn decode(record: &PatternRecord) -> GuardianResult<Self> {
        let malformed = |reason: String| GuardianError::MalformedPattern {
            pattern_id: record.pattern_id.clone(),
            reason,
        };

        let pattern_type: PatternType = record.pattern_type.parse().map_err(malformed)?;
        let correction_rule: CorrectionRule = serde_json::from_str(&record.rule_json)
            .map_err(|e| malformed(format!("undecodable correction rule: {e}")))?;
        if correction_rule.pattern_type() != pattern_type {
            return Err(malformed(format!(
                "rule kind {} does not match pattern type {}",
                correction_rule.pattern_type(),
                pattern_type
            )));
        }
        if record.trigger_conditions.is_empty() {
            return Err(malformed("no trigger conditions".to_string()));
        }

        Ok(Self {
            pattern_id: record.pattern_id.clone(),
            pattern_type,
            trigger_conditions: record.trigger_conditions.clone(),
            correction_rule,
            confidence: Confidence::new(record.confidence_score),
            usage_count: record.usage_count,
            success_rate: record.success_rate.clamp(0.0, 1.0),
            outcome_count: record.outcome_count,
            created_at: record.created_at,
            last_updated: record.last_updated,
        })
    }

    pub fn to_record(&self) -> GuardianResult<PatternRecord> {
        Ok(PatternRecord {
            pattern_id: self.pattern_id.clone(),
            pattern_type: self.pattern_type.as_str().to_string(),
            trigger_conditions: self.trigger_conditions.clone(),
            rule_json: self.correction_rule.to_json()?,
            confidence_score: self.confidence.value(),
            usage_count: self.usage_count,
            success_rate: self.success_rate,
            outcome_count: self.outcome_count,
            created_at: self.created_at,
            last_updated: self.last_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_pattern() -> LearnedPattern {
        LearnedPattern::new(
            "p1".into(),
            vec!["artificial intelligence".into()],
            CorrectionRule::Topic(TopicRule { topic: "AI".into() }),
            Utc::now(),
        )
    }

    #[test]
    fn rule_json_carries_discriminator() {
        let rule = CorrectionRule::Topic(TopicRule { topic: "AI".into() });
        let json = rule.to_json().unwrap();
        assert!(json.contains(r#""kind":"topic""#));
        assert!(json.contains(r#""topic":"AI""#));
    }

    #[test]
    fn new_pattern_uses_type_confidence() {
        let p = topic_pattern();
        assert_eq!(p.pattern_type, PatternType::Topic);
        assert_eq!(p.confidence.value(), 0.80);
        assert_eq!(p.usage_count, 1);
        assert_eq!(p.success_rate, 1.0);
    }

    #[test]
    fn decode_accepts_own_record() {
        let p = topic_pattern();
        let decoded = LearnedPattern::decode(&p.to_record().unwrap()).unwrap();
        assert_eq!(decoded.correction_rule, p.correction_rule);
    }

    #[test]
    fn decode_rejects_kind_mismatch() {
        let mut record = topic_pattern().to_record().unwrap();
        record.pattern_type = "title".into();
        let err = LearnedPattern::decode(&record).unwrap_err();
        assert!(matches!(err, GuardianError::MalformedPattern { .. }));
    }

    #[test]
    fn decode_rejects_garbage_rule() {
        let mut record = topic_pattern().to_record().unwrap();
        record.rule_json = "{not json".into();
        assert!(LearnedPattern::decode(&record).is_err());
        record.rule_json = r#"{"kind":"topic"}"#.into();
        assert!(LearnedPattern::decode(&record).is_err());
    }

    #[test]
    fn initial_confidences_stay_in_band() {
        for t in PatternType::ALL {
            let c = t.initial_confidence();
            assert!((0.75..=0.85).contains(&c));
        }
    }
}
