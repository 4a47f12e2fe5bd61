//! PolicyOptimizer: Q-learning over opaque state/action identifiers.

use std::sync::Arc;

use guardian_core::config::OptimizerConfig;
use guardian_core::errors::{GuardianError, GuardianResult};
use guardian_core::traits::IQValueStore;
use tracing::{debug, info, warn};

use crate::q_table::QTable;

/// Result of one update, including any write-through failure.
#[derive(Debug)]
pub struct QUpdateOutcome {
    pub value: f64,
    /// `PersistenceUnavailable` if the store rejected the write.
    pub persistence_error: Option<GuardianError>,
}

/// Q-learning optimizer owning its table and an optional persistent store.
pub struct PolicyOptimizer {
    table: QTable,
    alpha: f64,
    gamma: f64,
    store: Option<Arc<dyn IQValueStore>>,
}

impl PolicyOptimizer {
    pub fn new(config: &OptimizerConfig) -> Self {
        Self {
            table: QTable::new(config.max_states),
            alpha: config.alpha,
            gamma: config.gamma,
            store: None,
        }
    }

    /// Create an optimizer that writes every update through to `store`.
    pub fn with_store(config: &OptimizerConfig, store: Arc<dyn IQValueStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::new(config)
        }
    }

    /// Apply one Q-learning update and return the new `Q(state, action)`.
    ///
    /// Persistence failures are logged and never fail the update.
    pub fn update(&self, state: &str, action: &str, reward: f64, next_state: &str) -> f64 {
        self.update_reporting(state, action, reward, next_state).value
    }

    /// Like [`update`](Self::update) but also hands back any persistence failure.
    pub fn update_reporting(
        &self,
        state: &str,
        action: &str,
        reward: f64,
        next_state: &str,
    ) -> QUpdateOutcome {
        let reward = if reward.is_finite() {
            reward
        } else {
            warn!(state, action, reward, "non-finite reward treated as 0");
            0.0
        };

        // Read max over next_state before locking the (state, action) row so
        // that state == next_state cannot self-deadlock.
        let max_next = self.table.max_value(next_state);
        let (alpha, gamma) = (self.alpha, self.gamma);
        // Persist while the row is held so concurrent writes to one entry
        // reach the store in the order they reached the table.
        let (value, persisted) = self.table.update_and_commit(
            state,
            action,
            |q| q + alpha * (reward + gamma * max_next - q),
            |value| match &self.store {
                Some(store) => store.save_q_value(state, action, value),
                None => Ok(()),
            },
        );
        debug!(state, action, reward, max_next, value, "q-value updated");

        let persistence_error = persisted.err().map(|e| {
            let err = GuardianError::persistence("save_q_value", e);
            warn!(error = %err, state, action, "q-value not persisted");
            err
        });

        self.sweep();

        QUpdateOutcome {
            value,
            persistence_error,
        }
    }

    /// Current `Q(state, action)`, 0.0 when unseen.
    pub fn q_value(&self, state: &str, action: &str) -> f64 {
        self.table.get(state, action)
    }

    /// Greedy action for `state`, if any action has been rewarded there.
    pub fn recommend(&self, state: &str) -> Option<String> {
        self.table.best_action(state).map(|(action, _)| action)
    }

    pub fn state_count(&self) -> usize {
        self.table.len()
    }

    /// Warm the table from the store. Returns the number of entries loaded.
    pub fn load_from_store(&self) -> GuardianResult<usize> {
        let Some(store) = &self.store else {
            return Ok(0);
        };
        let rows = store
            .load_q_values()
            .map_err(|e| GuardianError::persistence("load_q_values", e))?;
        let count = rows.len();
        for row in rows {
            self.table.insert(&row.state, &row.action, row.value);
        }
        self.sweep();
        info!(entries = count, states = self.table.len(), "q-table loaded from store");
        Ok(count)
    }

    /// Enforce the state cap, dropping evicted states from the store too.
    fn sweep(&self) {
        if self.table.len() <= self.table.max_states() {
            return;
        }
        let evicted = self.table.evict_excess_with(|state| {
            if let Some(store) = &self.store {
                if let Err(e) = store.delete_state(state) {
                    warn!(state, error = %e, "evicted state not removed from store");
                }
            }
        });
        if !evicted.is_empty() {
            info!(evicted = evicted.len(), max_states = self.table.max_states(), "q-table states evicted");
        }
    }
}

impl Default for PolicyOptimizer {
    fn default() -> Self {
        Self::new(&OptimizerConfig::default())
    }
}
