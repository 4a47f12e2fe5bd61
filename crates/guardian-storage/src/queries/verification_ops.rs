//! Upsert and lookup of verification events keyed by content_hash.

use rusqlite::{params, Connection, OptionalExtension};

use guardian_core::errors::GuardianResult;
use guardian_core::models::{EventUpsert, VerificationEvent};

use super::{from_json_col, in_transaction, parse_dt, text, to_json};
use crate::to_storage_err;

/// Insert the event or overwrite the row with the same content_hash.
/// The original `event_id` survives an overwrite.
pub fn upsert_event(conn: &Connection, event: &VerificationEvent) -> GuardianResult<EventUpsert> {
    in_transaction(conn, "upsert_event", |conn| {
        let exists = conn
            .query_row(
                "SELECT 1 FROM verification_patterns WHERE content_hash = ?1",
                params![event.content_hash],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))?
            .is_some();

        conn.execute(
            "INSERT INTO verification_patterns (
                event_id, document_id, original_extraction, verified_extraction,
                user_corrections, confidence_per_field, content_sample, content_hash,
                document_type, source_type, timestamp
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(content_hash) DO UPDATE SET
                document_id = excluded.document_id,
                original_extraction = excluded.original_extraction,
                verified_extraction = excluded.verified_extraction,
                user_corrections = excluded.user_corrections,
                confidence_per_field = excluded.confidence_per_field,
                content_sample = excluded.content_sample,
                document_type = excluded.document_type,
                source_type = excluded.source_type,
                timestamp = excluded.timestamp",
            params![
                event.event_id,
                event.document_id,
                to_json(&event.original, "original")?,
                to_json(&event.verified, "verified")?,
                to_json(&event.corrections, "corrections")?,
                to_json(&event.confidence_per_field, "confidence_per_field")?,
                event.content_sample,
                event.content_hash,
                event.document_type,
                event.source_type,
                event.timestamp.to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

        Ok(if exists {
            EventUpsert::Overwritten
        } else {
            EventUpsert::Inserted
        })
    })
}

pub fn get_event(conn: &Connection, content_hash: &str) -> GuardianResult<Option<VerificationEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT event_id, document_id, original_extraction, verified_extraction,
                    user_corrections, confidence_per_field, content_sample, content_hash,
                    document_type, source_type, timestamp
             FROM verification_patterns WHERE content_hash = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![content_hash], |row| Ok(row_to_event(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    result.transpose()
}

pub fn count_events(conn: &Connection) -> GuardianResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM verification_patterns", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

fn row_to_event(row: &rusqlite::Row<'_>) -> GuardianResult<VerificationEvent> {
    Ok(VerificationEvent {
        event_id: text(row, 0)?,
        document_id: text(row, 1)?,
        original: from_json_col(row, 2, "original_extraction")?,
        verified: from_json_col(row, 3, "verified_extraction")?,
        corrections: from_json_col(row, 4, "user_corrections")?,
        confidence_per_field: from_json_col(row, 5, "confidence_per_field")?,
        content_sample: text(row, 6)?,
        content_hash: text(row, 7)?,
        document_type: text(row, 8)?,
        source_type: text(row, 9)?,
        timestamp: parse_dt(&text(row, 10)?)?,
    })
}
