//! GuardianRuntime: the context object every call site goes through.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use guardian_core::config::GuardianConfig;
use guardian_core::errors::GuardianResult;
use guardian_core::models::{ComprehensiveScores, CorrectionRequest, Metadata};
use guardian_core::traits::{IPatternStore, IQValueStore, IVerificationStore};
use guardian_learning::{LearningStats, PatternApplier, VerificationLearner};
use guardian_optimizer::PolicyOptimizer;
use guardian_scoring::ScoringEngine;
use guardian_storage::{InMemoryStore, StorageEngine};

use crate::{assess_span, learning_span, q_update_span};

/// Options for building a runtime.
#[derive(Debug, Default, Clone)]
pub struct RuntimeOptions {
    /// SQLite database file. Takes precedence over `storage.db_path`; when
    /// both are absent everything stays in memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration file, read with [`GuardianConfig::load`].
    pub config_path: Option<PathBuf>,
    /// Inline TOML configuration, used when `config_path` is `None`.
    pub config_toml: Option<String>,
}

impl RuntimeOptions {
    /// Configuration from the file, the inline TOML or the defaults, with
    /// `GUARDIAN_*` environment overrides applied and validated.
    pub fn resolve_config(&self) -> GuardianResult<GuardianConfig> {
        self.resolve_config_with(|key| std::env::var(key).ok())
    }

    /// [`resolve_config`](Self::resolve_config) with overrides drawn from `lookup`.
    pub fn resolve_config_with<F>(&self, lookup: F) -> GuardianResult<GuardianConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = &self.config_path {
            return Ok(GuardianConfig::load_with(path, lookup)?);
        }
        let mut config = match &self.config_toml {
            Some(toml_str) => GuardianConfig::from_toml(toml_str)?,
            None => GuardianConfig::default(),
        };
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }
}

pub struct GuardianRuntime {
    config: GuardianConfig,
    scoring: ScoringEngine,
    optimizer: PolicyOptimizer,
    learner: VerificationLearner,
    applier: PatternApplier,
    persistent: bool,
}

impl GuardianRuntime {
    pub fn new(opts: RuntimeOptions) -> GuardianResult<Self> {
        let config = opts.resolve_config()?;
        Self::open(config, opts.db_path)
    }

    /// Build from an already resolved configuration, storing at
    /// `storage.db_path` when it is set.
    pub fn with_config(config: GuardianConfig) -> GuardianResult<Self> {
        config.validate()?;
        Self::open(config, None)
    }

    fn open(config: GuardianConfig, db_path: Option<PathBuf>) -> GuardianResult<Self> {
        let db_path = db_path.or_else(|| config.storage.db_path.as_ref().map(PathBuf::from));
        let runtime = match &db_path {
            Some(path) => {
                let store = Arc::new(StorageEngine::open_with_config(path, &config.storage)?);
                Self::wire(config, store, true)
            }
            None => Self::wire(config, Arc::new(InMemoryStore::new()), false),
        };

        match runtime.optimizer.load_from_store() {
            Ok(entries) if entries > 0 => info!(entries, "q-table restored"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "q-table not restored, starting empty"),
        }
        info!(
            persistent = runtime.persistent,
            db_path = ?db_path,
            "guardian runtime ready"
        );
        Ok(runtime)
    }

    fn wire<S>(config: GuardianConfig, store: Arc<S>, persistent: bool) -> Self
    where
        S: IVerificationStore + IPatternStore + IQValueStore + 'static,
    {
        let q_store: Arc<dyn IQValueStore> = store.clone();
        let optimizer = PolicyOptimizer::with_store(&config.optimizer, q_store);
        let learner = VerificationLearner::with_store(store, config.learning.clone());
        let applier = learner.applier();
        Self {
            scoring: ScoringEngine::new(config.scoring.clone()),
            optimizer,
            learner,
            applier,
            persistent,
            config,
        }
    }

    pub fn config(&self) -> &GuardianConfig {
        &self.config
    }

    /// Whether state survives the process.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn optimizer(&self) -> &PolicyOptimizer {
        &self.optimizer
    }

    pub fn learner(&self) -> &VerificationLearner {
        &self.learner
    }

    // ── Scoring ─────────────────────────────────────────────────────────────

    pub fn assess(&self, content: &str, title: &str) -> ComprehensiveScores {
        let _span = assess_span!(content.len()).entered();
        self.scoring.assess(content, title)
    }

    /// Score independent `(content, title)` documents in parallel.
    pub fn assess_batch(&self, documents: &[(String, String)]) -> Vec<ComprehensiveScores> {
        let _span = assess_span!(documents.len()).entered();
        self.scoring.assess_batch(documents)
    }

    // ── Learning ────────────────────────────────────────────────────────────

    /// Record a correction. Returns the first mined pattern id, or the
    /// content hash of the stored event when no pattern was mined.
    pub fn record_correction(&self, request: &CorrectionRequest) -> GuardianResult<String> {
        let _span = learning_span!(request.document_id).entered();
        let recorded = self.learner.record_correction(request)?;
        Ok(recorded.primary_id().to_string())
    }

    /// Record a correction from a JSON payload with the `record_correction`
    /// field names.
    pub fn record_correction_json(&self, payload: &str) -> GuardianResult<String> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let document_id = value
            .get("document_id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        let _span = learning_span!(document_id).entered();
        let recorded = self.learner.record_correction_value(&value)?;
        Ok(recorded.primary_id().to_string())
    }

    pub fn apply_patterns(&self, content: &str, metadata: &Metadata) -> Metadata {
        self.applier.apply(content, metadata)
    }

    pub fn report_outcome(&self, pattern_id: &str, was_correct: bool) -> GuardianResult<bool> {
        self.learner.report_outcome(pattern_id, was_correct)
    }

    pub fn learning_stats(&self) -> GuardianResult<LearningStats> {
        self.learner.stats()
    }

    // ── Optimizer ───────────────────────────────────────────────────────────

    pub fn q_update(&self, state: &str, action: &str, reward: f64, next_state: &str) -> f64 {
        let _span = q_update_span!(state, action).entered();
        self.optimizer.update(state, action, reward, next_state)
    }

    pub fn recommend(&self, state: &str) -> Option<String> {
        self.optimizer.recommend(state)
    }
}
