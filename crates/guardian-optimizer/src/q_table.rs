//! Concurrent Q-table keyed by state.
//!
//! Each state row lives in one DashMap shard, so a read-modify-write of a
//! `(state, action)` entry is atomic under that row's lock while updates to
//! other states proceed in parallel.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

#[derive(Debug, Default)]
struct StateRow {
    actions: HashMap<String, f64>,
    /// Logical time of the last write to this row.
    last_touched: u64,
}

/// map(state) → map(action) → value, capped at `max_states` rows.
#[derive(Debug)]
pub struct QTable {
    rows: DashMap<String, StateRow>,
    clock: AtomicU64,
    max_states: usize,
}

impl QTable {
    pub fn new(max_states: usize) -> Self {
        Self {
            rows: DashMap::new(),
            clock: AtomicU64::new(0),
            max_states: max_states.max(1),
        }
    }

    /// Stored value, 0.0 when absent.
    pub fn get(&self, state: &str, action: &str) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.actions.get(action).copied())
            .unwrap_or(0.0)
    }

    /// `max_a Q(state, a)`, 0.0 for an unknown or empty state.
    pub fn max_value(&self, state: &str) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.actions.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// Atomically replace `Q(state, action)` with `f(current)`.
    /// Missing entries start at 0.0. Returns the new value.
    ///
    /// The row lock is held while `f` runs; `f` must not touch this table.
    pub fn update_with<F>(&self, state: &str, action: &str, f: F) -> f64
    where
        F: FnOnce(f64) -> f64,
    {
        self.update_and_commit(state, action, f, |_| ()).0
    }

    /// [`update_with`](Self::update_with), then run `commit` on the new value
    /// before the row lock is released. Writes to the same entry therefore
    /// reach `commit` in the same order they reach the table.
    pub fn update_and_commit<F, C, R>(&self, state: &str, action: &str, f: F, commit: C) -> (f64, R)
    where
        F: FnOnce(f64) -> f64,
        C: FnOnce(f64) -> R,
    {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed) + 1;
        let mut row = self.rows.entry(state.to_string()).or_default();
        let slot = row.actions.entry(action.to_string()).or_insert(0.0);
        let next = f(*slot);
        *slot = next;
        row.last_touched = tick;
        let committed = commit(next);
        (next, committed)
    }

    /// Set a value directly. Used when warming the table from storage.
    pub fn insert(&self, state: &str, action: &str, value: f64) {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed) + 1;
        let mut row = self.rows.entry(state.to_string()).or_default();
        row.actions.insert(action.to_string(), value);
        row.last_touched = tick;
    }

    /// Greedy action for `state`; ties go to the lexicographically smallest.
    pub fn best_action(&self, state: &str) -> Option<(String, f64)> {
        let row = self.rows.get(state)?;
        row.actions
            .iter()
            .fold(None::<(&String, f64)>, |best, (action, value)| match best {
                Some((b_action, b_value))
                    if b_value > *value || (b_value == *value && b_action < action) =>
                {
                    Some((b_action, b_value))
                }
                _ => Some((action, *value)),
            })
            .map(|(a, v)| (a.clone(), v))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }

    /// Remove least-recently-updated rows until at most `max_states` remain.
    /// Returns the evicted states.
    pub fn evict_excess(&self) -> Vec<String> {
        self.evict_excess_with(|_| ())
    }

    /// Like [`evict_excess`](Self::evict_excess), calling `on_evict` for each
    /// removed state while its shard is still locked.
    ///
    /// A row written after the age snapshot was taken is skipped, so a fresh
    /// update never loses its value to an eviction decided on stale ages.
    pub fn evict_excess_with<E>(&self, mut on_evict: E) -> Vec<String>
    where
        E: FnMut(&str),
    {
        let len = self.rows.len();
        if len <= self.max_states {
            return Vec::new();
        }
        let mut ages: Vec<(u64, String)> = self
            .rows
            .iter()
            .map(|entry| (entry.value().last_touched, entry.key().clone()))
            .collect();
        ages.sort();
        let excess = len - self.max_states;
        let mut evicted = Vec::with_capacity(excess);
        for (seen, state) in ages {
            if evicted.len() == excess {
                break;
            }
            let removed = self.rows.remove_if(&state, |key, row| {
                if row.last_touched != seen {
                    return false;
                }
                on_evict(key.as_str());
                true
            });
            if removed.is_some() {
                evicted.push(state);
            }
        }
        evicted
    }
}
