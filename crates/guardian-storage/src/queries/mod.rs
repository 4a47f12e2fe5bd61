pub mod pattern_ops;
pub mod q_value_ops;
pub mod verification_ops;

use chrono::{DateTime, Utc};

use guardian_core::errors::GuardianResult;

use crate::to_storage_err;

pub(crate) fn parse_dt(s: &str) -> GuardianResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}

pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> GuardianResult<String> {
    serde_json::to_string(value).map_err(|e| to_storage_err(format!("serialize {what}: {e}")))
}

pub(crate) fn text(row: &rusqlite::Row<'_>, idx: usize) -> GuardianResult<String> {
    row.get(idx).map_err(|e| to_storage_err(e.to_string()))
}

pub(crate) fn from_json_col<T: serde::de::DeserializeOwned>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    what: &str,
) -> GuardianResult<T> {
    let raw = text(row, idx)?;
    serde_json::from_str(&raw).map_err(|e| to_storage_err(format!("parse {what}: {e}")))
}

/// Run `f` inside a transaction: commit on Ok, roll back on Err.
pub(crate) fn in_transaction<F, T>(conn: &rusqlite::Connection, op: &str, f: F) -> GuardianResult<T>
where
    F: FnOnce(&rusqlite::Connection) -> GuardianResult<T>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("{op} begin: {e}")))?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}
