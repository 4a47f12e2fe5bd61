//! Process-local store with the same contract as `StorageEngine`.
//! Used when no database path is configured, and in tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use guardian_core::errors::{GuardianResult, StorageError};
use guardian_core::models::{
    EventUpsert, PatternRecord, PatternUpsert, VerificationEvent,
};
use guardian_core::traits::{IPatternStore, IQValueStore, IVerificationStore, QValueRow};

#[derive(Default)]
struct QState {
    /// (state, action) -> (value, write sequence)
    values: BTreeMap<(String, String), (f64, u64)>,
    seq: u64,
}

#[derive(Default)]
pub struct InMemoryStore {
    events: RwLock<HashMap<String, VerificationEvent>>,
    patterns: RwLock<HashMap<String, PatternRecord>>,
    q_values: RwLock<QState>,
}

fn read<'a, T>(lock: &'a RwLock<T>, what: &str) -> GuardianResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|e| {
        StorageError::LockPoisoned {
            what: format!("{what}: {e}"),
        }
        .into()
    })
}

fn write<'a, T>(lock: &'a RwLock<T>, what: &str) -> GuardianResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|e| {
        StorageError::LockPoisoned {
            what: format!("{what}: {e}"),
        }
        .into()
    })
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IVerificationStore for InMemoryStore {
    fn upsert_event(&self, event: &VerificationEvent) -> GuardianResult<EventUpsert> {
        let mut events = write(&self.events, "events")?;
        match events.get_mut(&event.content_hash) {
            Some(existing) => {
                let event_id = std::mem::take(&mut existing.event_id);
                *existing = VerificationEvent {
                    event_id,
                    ..event.clone()
                };
                Ok(EventUpsert::Overwritten)
            }
            None => {
                events.insert(event.content_hash.clone(), event.clone());
                Ok(EventUpsert::Inserted)
            }
        }
    }

    fn get_event(&self, content_hash: &str) -> GuardianResult<Option<VerificationEvent>> {
        Ok(read(&self.events, "events")?.get(content_hash).cloned())
    }

    fn event_count(&self) -> GuardianResult<usize> {
        Ok(read(&self.events, "events")?.len())
    }
}

impl IPatternStore for InMemoryStore {
    fn upsert_pattern(&self, record: &PatternRecord) -> GuardianResult<PatternUpsert> {
        let mut patterns = write(&self.patterns, "patterns")?;
        match patterns.get_mut(&record.pattern_id) {
            Some(existing) => {
                existing.usage_count += 1;
                existing.last_updated = record.last_updated;
                Ok(PatternUpsert::Reinforced {
                    usage_count: existing.usage_count,
                })
            }
            None => {
                patterns.insert(record.pattern_id.clone(), record.clone());
                Ok(PatternUpsert::Created)
            }
        }
    }

    fn get_pattern(&self, pattern_id: &str) -> GuardianResult<Option<PatternRecord>> {
        Ok(read(&self.patterns, "patterns")?.get(pattern_id).cloned())
    }

    fn list_patterns(&self) -> GuardianResult<Vec<PatternRecord>> {
        let mut all: Vec<PatternRecord> =
            read(&self.patterns, "patterns")?.values().cloned().collect();
        all.sort_by(|a, b| {
            b.confidence_score
                .total_cmp(&a.confidence_score)
                .then_with(|| a.pattern_id.cmp(&b.pattern_id))
        });
        Ok(all)
    }

    fn update_pattern(&self, record: &PatternRecord) -> GuardianResult<bool> {
        let mut patterns = write(&self.patterns, "patterns")?;
        let Some(existing) = patterns.get_mut(&record.pattern_id) else {
            return Ok(false);
        };
        existing.confidence_score = record.confidence_score;
        existing.success_rate = record.success_rate;
        existing.outcome_count = record.outcome_count;
        existing.usage_count = record.usage_count;
        existing.last_updated = record.last_updated;
        Ok(true)
    }

    fn delete_pattern(&self, pattern_id: &str) -> GuardianResult<bool> {
        Ok(write(&self.patterns, "patterns")?.remove(pattern_id).is_some())
    }

    fn pattern_count(&self) -> GuardianResult<usize> {
        Ok(read(&self.patterns, "patterns")?.len())
    }
}

impl IQValueStore for InMemoryStore {
    fn save_q_value(&self, state: &str, action: &str, value: f64) -> GuardianResult<()> {
        let mut q = write(&self.q_values, "q_values")?;
        q.seq += 1;
        let seq = q.seq;
        q.values
            .insert((state.to_string(), action.to_string()), (value, seq));
        Ok(())
    }

    /// Rows come back in write order, oldest first.
    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>> {
        let q = read(&self.q_values, "q_values")?;
        let mut rows: Vec<(u64, QValueRow)> = q
            .values
            .iter()
            .map(|((state, action), (value, seq))| {
                (
                    *seq,
                    QValueRow {
                        state: state.clone(),
                        action: action.clone(),
                        value: *value,
                    },
                )
            })
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }

    fn delete_state(&self, state: &str) -> GuardianResult<usize> {
        let mut q = write(&self.q_values, "q_values")?;
        let before = q.values.len();
        q.values.retain(|(s, _), _| s != state);
        Ok(before - q.values.len())
    }
}
