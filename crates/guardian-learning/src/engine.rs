//! VerificationLearner: captures human metadata corrections and mines them
//! into reusable patterns.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use guardian_core::config::LearningConfig;
use guardian_core::errors::{GuardianError, GuardianResult, StorageError};
use guardian_core::models::{
    Confidence, CorrectionKind, CorrectionRequest, EventUpsert, FieldCorrection, LearnedPattern,
    PatternType, PatternUpsert, VerificationEvent,
};
use guardian_core::traits::{IPatternStore, IVerificationStore};

use crate::analysis;
use crate::applier::PatternApplier;
use crate::extraction;
use crate::hashing;

/// One pattern produced by a correction.
#[derive(Debug, Clone, PartialEq)]
pub struct MinedPattern {
    pub pattern_id: String,
    pub pattern_type: PatternType,
    pub upsert: PatternUpsert,
}

/// What `record_correction` stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCorrection {
    pub content_hash: String,
    pub event: EventUpsert,
    pub corrections: Vec<FieldCorrection>,
    pub patterns: Vec<MinedPattern>,
}

impl RecordedCorrection {
    /// The first mined pattern's id, or the event's content hash when no
    /// pattern came out of the correction.
    pub fn primary_id(&self) -> &str {
        self.patterns
            .first()
            .map(|p| p.pattern_id.as_str())
            .unwrap_or(self.content_hash.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearningStats {
    pub event_count: usize,
    pub pattern_count: usize,
    pub eligible_pattern_count: usize,
}

pub struct VerificationLearner {
    events: Arc<dyn IVerificationStore>,
    patterns: Arc<dyn IPatternStore>,
    config: LearningConfig,
    /// Serializes the read-modify-write in `report_outcome`.
    outcome_lock: Mutex<()>,
}

fn persistence(operation: &'static str) -> impl Fn(GuardianError) -> GuardianError {
    move |e| {
        let err = GuardianError::persistence(operation, e);
        warn!(operation, error = %err, "learning store unavailable");
        err
    }
}

impl VerificationLearner {
    pub fn new(
        events: Arc<dyn IVerificationStore>,
        patterns: Arc<dyn IPatternStore>,
        config: LearningConfig,
    ) -> Self {
        Self {
            events,
            patterns,
            config,
            outcome_lock: Mutex::new(()),
        }
    }

    /// Use one backend for both events and patterns.
    pub fn with_store<S>(store: Arc<S>, config: LearningConfig) -> Self
    where
        S: IVerificationStore + IPatternStore + 'static,
    {
        let events: Arc<dyn IVerificationStore> = store.clone();
        let patterns: Arc<dyn IPatternStore> = store;
        Self::new(events, patterns, config)
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// An applier reading from this learner's pattern store.
    pub fn applier(&self) -> PatternApplier {
        PatternApplier::new(Arc::clone(&self.patterns), &self.config)
    }

    /// Validate, diff, store the event, and mine patterns from each
    /// learnable corrected field.
    pub fn record_correction(&self, request: &CorrectionRequest) -> GuardianResult<RecordedCorrection> {
        request.validate()?;

        let sample = hashing::content_sample(&request.content, self.config.content_sample_chars);
        let content_hash = hashing::content_hash(sample);

        let corrections = analysis::diff_fields(&request.original, &request.verified);
        let confidence_per_field: BTreeMap<String, f64> = request
            .verified
            .iter()
            .map(|(field, verified)| {
                let original = request.original.get(field).map(String::as_str).unwrap_or("");
                (field.clone(), analysis::field_confidence(original, verified))
            })
            .collect();

        let event = VerificationEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            document_id: request.document_id.clone(),
            original: request.original.clone(),
            verified: request.verified.clone(),
            corrections: corrections.clone(),
            content_sample: sample.to_string(),
            content_hash: content_hash.clone(),
            confidence_per_field,
            document_type: request.document_type.clone(),
            source_type: request.source_type.clone(),
            timestamp: Utc::now(),
        };
        let event_upsert = self
            .events
            .upsert_event(&event)
            .map_err(persistence("upsert_event"))?;

        let mut patterns = Vec::new();
        let mut swept = false;
        for correction in &corrections {
            if correction.kind == CorrectionKind::IncorrectFieldRemoved {
                continue;
            }
            let Some(pattern_type) = PatternType::for_field(&correction.field) else {
                continue;
            };
            if let Some((mined, evicted)) =
                self.mine_pattern(pattern_type, &correction.corrected, sample)?
            {
                swept |= evicted > 0;
                patterns.push(mined);
            }
        }
        if swept && patterns.len() > 1 {
            // A later insert's sweep may have evicted an earlier pattern of this call.
            let mut kept = Vec::with_capacity(patterns.len());
            for mined in patterns {
                if self
                    .patterns
                    .get_pattern(&mined.pattern_id)
                    .map_err(persistence("get_pattern"))?
                    .is_some()
                {
                    kept.push(mined);
                }
            }
            patterns = kept;
        }

        info!(
            document_id = %request.document_id,
            content_hash = %content_hash,
            corrections = corrections.len(),
            patterns = patterns.len(),
            overwritten = event_upsert == EventUpsert::Overwritten,
            "correction recorded"
        );

        Ok(RecordedCorrection {
            content_hash,
            event: event_upsert,
            corrections,
            patterns,
        })
    }

    /// Parse an untyped payload and record it.
    pub fn record_correction_value(&self, payload: &Value) -> GuardianResult<RecordedCorrection> {
        let request = CorrectionRequest::from_value(payload)?;
        self.record_correction(&request)
    }

    fn mine_pattern(
        &self,
        pattern_type: PatternType,
        corrected: &str,
        sample: &str,
    ) -> GuardianResult<Option<(MinedPattern, usize)>> {
        let Some(indicators) = extraction::mine(pattern_type, corrected, sample) else {
            debug!(pattern_type = %pattern_type, "no indicators in sample");
            return Ok(None);
        };

        let pattern_id = hashing::pattern_id(pattern_type, &indicators.triggers, &indicators.rule)?;
        let pattern = LearnedPattern::new(
            pattern_id.clone(),
            indicators.triggers,
            indicators.rule,
            Utc::now(),
        );
        let upsert = self
            .patterns
            .upsert_pattern(&pattern.to_record()?)
            .map_err(persistence("upsert_pattern"))?;

        let mut evicted = 0;
        match upsert {
            PatternUpsert::Created => {
                debug!(pattern_id = %pattern_id, pattern_type = %pattern_type, "pattern created");
                match self.sweep(Some(&pattern_id)) {
                    Ok(n) => evicted = n,
                    Err(e) => warn!(error = %e, "pattern capacity sweep failed"),
                }
            }
            PatternUpsert::Reinforced { usage_count } => {
                debug!(pattern_id = %pattern_id, usage_count, "pattern reinforced");
            }
        }

        let mined = MinedPattern {
            pattern_id,
            pattern_type,
            upsert,
        };
        Ok(Some((mined, evicted)))
    }

    /// Feed back whether an applied pattern's correction was right.
    ///
    /// `success_rate` becomes the running mean of reported outcomes and
    /// confidence moves by `confirm_boost` / `reject_penalty`. Returns false
    /// for an unknown pattern.
    pub fn report_outcome(&self, pattern_id: &str, was_correct: bool) -> GuardianResult<bool> {
        let _guard = self.outcome_lock.lock().map_err(|e| StorageError::LockPoisoned {
            what: format!("outcome lock: {e}"),
        })?;

        let Some(mut record) = self
            .patterns
            .get_pattern(pattern_id)
            .map_err(persistence("get_pattern"))?
        else {
            return Ok(false);
        };

        let observed = if was_correct { 1.0 } else { 0.0 };
        let n = record.outcome_count as f64;
        record.success_rate = if record.outcome_count == 0 {
            observed
        } else {
            (record.success_rate * n + observed) / (n + 1.0)
        };
        record.outcome_count += 1;

        let confidence = Confidence::new(record.confidence_score);
        record.confidence_score = if was_correct {
            confidence + self.config.confirm_boost
        } else {
            confidence - self.config.reject_penalty
        }
        .value();
        record.last_updated = Utc::now();

        let updated = self
            .patterns
            .update_pattern(&record)
            .map_err(persistence("update_pattern"))?;

        info!(
            pattern_id,
            was_correct,
            confidence = record.confidence_score,
            success_rate = record.success_rate,
            outcomes = record.outcome_count,
            "pattern outcome reported"
        );
        Ok(updated)
    }

    /// Delete the weakest patterns (lowest confidence × success_rate, then
    /// oldest) until the store is back at `max_patterns`.
    pub fn enforce_capacity(&self) -> GuardianResult<usize> {
        self.sweep(None)
    }

    /// Capacity sweep that never evicts `keep`. `max_patterns` is at least 1,
    /// so a freshly inserted pattern always fits.
    fn sweep(&self, keep: Option<&str>) -> GuardianResult<usize> {
        let max = self.config.max_patterns;
        let count = self
            .patterns
            .pattern_count()
            .map_err(persistence("pattern_count"))?;
        if count <= max {
            return Ok(0);
        }

        let mut all = self
            .patterns
            .list_patterns()
            .map_err(persistence("list_patterns"))?;
        let excess = all.len().saturating_sub(max);
        all.retain(|p| Some(p.pattern_id.as_str()) != keep);
        all.sort_by(|a, b| {
            a.retention_score()
                .total_cmp(&b.retention_score())
                .then_with(|| a.last_updated.cmp(&b.last_updated))
                .then_with(|| a.pattern_id.cmp(&b.pattern_id))
        });

        let mut removed = 0;
        for record in all.iter().take(excess) {
            if self
                .patterns
                .delete_pattern(&record.pattern_id)
                .map_err(persistence("delete_pattern"))?
            {
                removed += 1;
            }
        }
        info!(removed, max_patterns = max, "pattern store swept");
        Ok(removed)
    }

    pub fn stats(&self) -> GuardianResult<LearningStats> {
        let event_count = self
            .events
            .event_count()
            .map_err(persistence("event_count"))?;
        let patterns = self
            .patterns
            .list_patterns()
            .map_err(persistence("list_patterns"))?;
        let threshold = self.config.min_pattern_confidence;
        let eligible_pattern_count = patterns
            .iter()
            .filter(|p| Confidence::new(p.confidence_score).is_eligible(threshold))
            .count();
        Ok(LearningStats {
            event_count,
            pattern_count: patterns.len(),
            eligible_pattern_count,
        })
    }
}
