//! Concurrency and persistence behavior of the policy optimizer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use guardian_core::config::OptimizerConfig;
use guardian_core::errors::{GuardianError, GuardianResult, StorageError};
use guardian_core::traits::{IQValueStore, QValueRow};
use guardian_optimizer::PolicyOptimizer;
use proptest::prelude::*;

#[derive(Default)]
struct RecordingStore {
    rows: Mutex<Vec<QValueRow>>,
    deleted: Mutex<Vec<String>>,
}

impl IQValueStore for RecordingStore {
    fn save_q_value(&self, state: &str, action: &str, value: f64) -> GuardianResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|r| !(r.state == state && r.action == action));
        rows.push(QValueRow {
            state: state.to_string(),
            action: action.to_string(),
            value,
        });
        Ok(())
    }

    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn delete_state(&self, state: &str) -> GuardianResult<usize> {
        self.deleted.lock().unwrap().push(state.to_string());
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.state != state);
        Ok(before - rows.len())
    }
}

/// Stalls the first save after announcing it, so a second writer can race it.
struct SlowFirstSave {
    inner: RecordingStore,
    stalled: AtomicBool,
    entered: Mutex<Option<mpsc::Sender<()>>>,
}

impl IQValueStore for SlowFirstSave {
    fn save_q_value(&self, state: &str, action: &str, value: f64) -> GuardianResult<()> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            if let Some(tx) = self.entered.lock().unwrap().take() {
                tx.send(()).unwrap();
            }
            thread::sleep(Duration::from_millis(100));
        }
        self.inner.save_q_value(state, action, value)
    }

    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>> {
        self.inner.load_q_values()
    }

    fn delete_state(&self, state: &str) -> GuardianResult<usize> {
        self.inner.delete_state(state)
    }
}

struct UnreachableStore;

impl IQValueStore for UnreachableStore {
    fn save_q_value(&self, _: &str, _: &str, _: f64) -> GuardianResult<()> {
        Err(StorageError::SqliteError {
            message: "unable to open database file".into(),
        }
        .into())
    }

    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>> {
        Err(StorageError::SqliteError {
            message: "unable to open database file".into(),
        }
        .into())
    }

    fn delete_state(&self, _: &str) -> GuardianResult<usize> {
        Ok(0)
    }
}

// ── Concurrency ──────────────────────────────────────────────────────────

#[test]
fn concurrent_updates_to_one_key_are_serialized() {
    let opt = Arc::new(PolicyOptimizer::default());
    let threads = 8;
    let per_thread = 50;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let opt = Arc::clone(&opt);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    opt.update("shared", "act", 1.0, "terminal");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    // Identical updates commute: Q_n = 1 − 0.9^n.
    let n = (threads * per_thread) as i32;
    let expected = 1.0 - 0.9f64.powi(n);
    assert!((opt.q_value("shared", "act") - expected).abs() < 1e-9);
}

#[test]
fn concurrent_updates_to_distinct_keys() {
    let opt = Arc::new(PolicyOptimizer::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let opt = Arc::clone(&opt);
            thread::spawn(move || {
                let state = format!("s{i}");
                opt.update(&state, "a", 1.0, "terminal");
                opt.update(&state, "a", 1.0, "terminal");
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    for i in 0..8 {
        assert!((opt.q_value(&format!("s{i}"), "a") - 0.19).abs() < 1e-12);
    }
}

// ── Persistence ──────────────────────────────────────────────────────────

#[test]
fn updates_write_through_and_reload() {
    let store = Arc::new(RecordingStore::default());
    let config = OptimizerConfig::default();
    let opt = PolicyOptimizer::with_store(&config, store.clone());
    opt.update("s", "a", 1.0, "t");
    opt.update("s", "a", 1.0, "t");

    let fresh = PolicyOptimizer::with_store(&config, store);
    assert_eq!(fresh.load_from_store().unwrap(), 1);
    assert!((fresh.q_value("s", "a") - 0.19).abs() < 1e-12);
}

#[test]
fn store_failure_still_returns_value() {
    let opt = PolicyOptimizer::with_store(&OptimizerConfig::default(), Arc::new(UnreachableStore));
    let outcome = opt.update_reporting("s", "a", 1.0, "t");
    assert!((outcome.value - 0.1).abs() < 1e-12);
    assert!(matches!(
        outcome.persistence_error,
        Some(GuardianError::PersistenceUnavailable { .. })
    ));
    assert!((opt.update("s", "a", 1.0, "t") - 0.19).abs() < 1e-12);
}

#[test]
fn load_failure_is_persistence_unavailable() {
    let opt = PolicyOptimizer::with_store(&OptimizerConfig::default(), Arc::new(UnreachableStore));
    let err = opt.load_from_store().unwrap_err();
    assert!(matches!(err, GuardianError::PersistenceUnavailable { .. }));
}

#[test]
fn evicted_states_are_removed_from_store() {
    let store = Arc::new(RecordingStore::default());
    let config = OptimizerConfig {
        max_states: 2,
        ..OptimizerConfig::default()
    };
    let opt = PolicyOptimizer::with_store(&config, store.clone());
    opt.update("a", "x", 1.0, "t");
    opt.update("b", "x", 1.0, "t");
    opt.update("c", "x", 1.0, "t");
    assert_eq!(store.deleted.lock().unwrap().as_slice(), ["a".to_string()]);
    assert_eq!(store.load_q_values().unwrap().len(), 2);
}

#[test]
fn racing_writes_to_one_key_persist_in_order() {
    let (tx, rx) = mpsc::channel();
    let store = Arc::new(SlowFirstSave {
        inner: RecordingStore::default(),
        stalled: AtomicBool::new(false),
        entered: Mutex::new(Some(tx)),
    });
    let opt = Arc::new(PolicyOptimizer::with_store(
        &OptimizerConfig::default(),
        store.clone(),
    ));

    let first = {
        let opt = Arc::clone(&opt);
        thread::spawn(move || opt.update("s", "a", 1.0, "terminal"))
    };
    rx.recv().unwrap();
    let q2 = opt.update("s", "a", 1.0, "terminal");
    let q1 = first.join().unwrap();

    assert!((q1 - 0.1).abs() < 1e-12);
    assert!((q2 - 0.19).abs() < 1e-12);
    let rows = store.load_q_values().unwrap();
    assert_eq!(rows.len(), 1);
    assert!((rows[0].value - 0.19).abs() < 1e-12);

    let restarted = PolicyOptimizer::with_store(&OptimizerConfig::default(), store);
    restarted.load_from_store().unwrap();
    assert!((restarted.q_value("s", "a") - 0.19).abs() < 1e-12);
}

#[test]
fn store_matches_table_after_concurrent_capped_updates() {
    let store = Arc::new(RecordingStore::default());
    let config = OptimizerConfig {
        max_states: 4,
        ..OptimizerConfig::default()
    };
    let opt = Arc::new(PolicyOptimizer::with_store(&config, store.clone()));
    let handles: Vec<_> = (0..6)
        .map(|t| {
            let opt = Arc::clone(&opt);
            thread::spawn(move || {
                for i in 0..40 {
                    opt.update(&format!("s{}", (t + i) % 9), "act", 1.0, "terminal");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert!(opt.state_count() <= 4);
    let rows = store.load_q_values().unwrap();
    assert_eq!(rows.len(), opt.state_count());
    for row in rows {
        assert_eq!(opt.q_value(&row.state, &row.action), row.value, "state {}", row.state);
    }
}

// ── Convergence ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_reward_converges_monotonically(reward in 0.1f64..10.0, steps in 1usize..60) {
        let opt = PolicyOptimizer::default();
        let mut prev = 0.0;
        for _ in 0..steps {
            let q = opt.update("s", "a", reward, "terminal");
            prop_assert!(q > prev);
            prop_assert!(q <= reward + 1e-9);
            prev = q;
        }
    }
}
