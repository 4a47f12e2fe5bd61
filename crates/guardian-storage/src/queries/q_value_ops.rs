use chrono::Utc;
use rusqlite::{params, Connection};

use guardian_core::errors::GuardianResult;
use guardian_core::traits::QValueRow;

use crate::to_storage_err;

pub fn save_q_value(conn: &Connection, state: &str, action: &str, value: f64) -> GuardianResult<()> {
    conn.execute(
        "INSERT INTO q_values (state, action, value, updated_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(state, action) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![state, action, value, Utc::now().to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn load_q_values(conn: &Connection) -> GuardianResult<Vec<QValueRow>> {
    let mut stmt = conn
        .prepare("SELECT state, action, value FROM q_values ORDER BY updated_at ASC, state, action")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(QValueRow {
                state: row.get(0)?,
                action: row.get(1)?,
                value: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_state(conn: &Connection, state: &str) -> GuardianResult<usize> {
    conn.execute("DELETE FROM q_values WHERE state = ?1", params![state])
        .map_err(|e| to_storage_err(e.to_string()))
}
