use crate::errors::GuardianResult;
use crate::models::{EventUpsert, PatternRecord, PatternUpsert, VerificationEvent};

/// Record store for verification events, keyed by `content_hash`.
pub trait IVerificationStore: Send + Sync {
    /// Insert the event, or overwrite the row with the same `content_hash`.
    /// An overwrite keeps the stored `event_id`.
    fn upsert_event(&self, event: &VerificationEvent) -> GuardianResult<EventUpsert>;
    fn get_event(&self, content_hash: &str) -> GuardianResult<Option<VerificationEvent>>;
    fn event_count(&self) -> GuardianResult<usize>;
}

/// Record store for learned patterns, keyed by `pattern_id`.
///
/// Writes are serialized; reads see the last committed snapshot.
pub trait IPatternStore: Send + Sync {
    /// Insert the pattern, or bump `usage_count` and `last_updated` on the
    /// existing row. Atomic with respect to concurrent upserts.
    fn upsert_pattern(&self, record: &PatternRecord) -> GuardianResult<PatternUpsert>;
    fn get_pattern(&self, pattern_id: &str) -> GuardianResult<Option<PatternRecord>>;
    fn list_patterns(&self) -> GuardianResult<Vec<PatternRecord>>;
    /// Replace the mutable scoring fields. Returns false if the pattern is unknown.
    fn update_pattern(&self, record: &PatternRecord) -> GuardianResult<bool>;
    fn delete_pattern(&self, pattern_id: &str) -> GuardianResult<bool>;
    fn pattern_count(&self) -> GuardianResult<usize>;
}

/// One persisted Q-table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct QValueRow {
    pub state: String,
    pub action: String,
    pub value: f64,
}

/// Write-through persistence for the policy optimizer.
pub trait IQValueStore: Send + Sync {
    fn save_q_value(&self, state: &str, action: &str, value: f64) -> GuardianResult<()>;
    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>>;
    fn delete_state(&self, state: &str) -> GuardianResult<usize>;
}
