//! Schema migrations using PRAGMA user_version.

pub mod v001_verification_tables;
pub mod v002_q_values;

use rusqlite::Connection;

use guardian_core::errors::{GuardianResult, StorageError};

/// Latest schema version.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> GuardianResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_verification_tables::MIGRATION_SQL, 1),
        (v002_q_values::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current < *version {
            let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            };
            conn.execute_batch(sql).map_err(failed)?;
            conn.pragma_update(None, "user_version", version).map_err(failed)?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> GuardianResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            StorageError::SqliteError {
                message: e.to_string(),
            }
            .into()
        })
}
