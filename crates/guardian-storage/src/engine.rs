//! StorageEngine: owns the ConnectionPool and implements the verification,
//! pattern and Q-value store traits.

use std::path::Path;

use guardian_core::config::StorageConfig;
use guardian_core::errors::GuardianResult;
use guardian_core::models::{
    EventUpsert, PatternRecord, PatternUpsert, VerificationEvent,
};
use guardian_core::traits::{IPatternStore, IQValueStore, IVerificationStore, QValueRow};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{pattern_ops, q_value_ops, verification_ops};

pub struct StorageEngine {
    pool: ConnectionPool,
    /// File-backed mode reads through the pool. In-memory mode routes reads
    /// through the writer, since pooled in-memory connections are separate
    /// databases.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a file-backed engine with default pool settings.
    pub fn open(path: &Path) -> GuardianResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> GuardianResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), readers = engine.pool.readers.size(), "storage opened");
        Ok(engine)
    }

    pub fn open_in_memory() -> GuardianResult<Self> {
        let pool = ConnectionPool::open_in_memory(StorageConfig::default().busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> GuardianResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> GuardianResult<u32> {
        self.with_reader(migrations::current_version)
    }

    fn with_reader<F, T>(&self, f: F) -> GuardianResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> GuardianResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl IVerificationStore for StorageEngine {
    fn upsert_event(&self, event: &VerificationEvent) -> GuardianResult<EventUpsert> {
        self.pool
            .writer
            .with_conn(|conn| verification_ops::upsert_event(conn, event))
    }

    fn get_event(&self, content_hash: &str) -> GuardianResult<Option<VerificationEvent>> {
        self.with_reader(|conn| verification_ops::get_event(conn, content_hash))
    }

    fn event_count(&self) -> GuardianResult<usize> {
        self.with_reader(verification_ops::count_events)
    }
}

impl IPatternStore for StorageEngine {
    fn upsert_pattern(&self, record: &PatternRecord) -> GuardianResult<PatternUpsert> {
        self.pool
            .writer
            .with_conn(|conn| pattern_ops::upsert_pattern(conn, record))
    }

    fn get_pattern(&self, pattern_id: &str) -> GuardianResult<Option<PatternRecord>> {
        self.with_reader(|conn| pattern_ops::get_pattern(conn, pattern_id))
    }

    fn list_patterns(&self) -> GuardianResult<Vec<PatternRecord>> {
        self.with_reader(pattern_ops::list_patterns)
    }

    fn update_pattern(&self, record: &PatternRecord) -> GuardianResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| pattern_ops::update_pattern(conn, record))
    }

    fn delete_pattern(&self, pattern_id: &str) -> GuardianResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| pattern_ops::delete_pattern(conn, pattern_id))
    }

    fn pattern_count(&self) -> GuardianResult<usize> {
        self.with_reader(pattern_ops::count_patterns)
    }
}

impl IQValueStore for StorageEngine {
    fn save_q_value(&self, state: &str, action: &str, value: f64) -> GuardianResult<()> {
        self.pool
            .writer
            .with_conn(|conn| q_value_ops::save_q_value(conn, state, action, value))
    }

    fn load_q_values(&self) -> GuardianResult<Vec<QValueRow>> {
        self.with_reader(q_value_ops::load_q_values)
    }

    fn delete_state(&self, state: &str) -> GuardianResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| q_value_ops::delete_state(conn, state))
    }
}
