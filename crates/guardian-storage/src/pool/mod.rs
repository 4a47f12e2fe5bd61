//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use guardian_core::errors::GuardianResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    /// The writer opens first so the file and WAL exist before readers attach.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> GuardianResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self { writer, readers })
    }

    /// In-memory writer only. Readers would be separate databases, so the
    /// engine routes reads through the writer in this mode.
    pub fn open_in_memory(busy_timeout_ms: u32) -> GuardianResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory(busy_timeout_ms)?,
            readers: ReadPool::empty(),
        })
    }
}
