//! CRUD for learned patterns.

use rusqlite::{params, Connection, OptionalExtension};

use guardian_core::errors::GuardianResult;
use guardian_core::models::{PatternRecord, PatternUpsert};

use super::{in_transaction, parse_dt, text, to_json};
use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT pattern_id, pattern_type, trigger_conditions, correction_rule,
        confidence_score, usage_count, success_rate, outcome_count, created_at, last_updated
 FROM learned_patterns";

/// Insert a new pattern, or reinforce an existing one by bumping
/// `usage_count` and `last_updated`. Confidence is left untouched on
/// reinforcement.
pub fn upsert_pattern(conn: &Connection, record: &PatternRecord) -> GuardianResult<PatternUpsert> {
    in_transaction(conn, "upsert_pattern", |conn| {
        let existing: Option<i64> = conn
            .query_row(
                "SELECT usage_count FROM learned_patterns WHERE pattern_id = ?1",
                params![record.pattern_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))?;

        match existing {
            Some(usage) => {
                conn.execute(
                    "UPDATE learned_patterns
                     SET usage_count = usage_count + 1, last_updated = ?2
                     WHERE pattern_id = ?1",
                    params![record.pattern_id, record.last_updated.to_rfc3339()],
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                Ok(PatternUpsert::Reinforced {
                    usage_count: usage as u64 + 1,
                })
            }
            None => {
                conn.execute(
                    "INSERT INTO learned_patterns (
                        pattern_id, pattern_type, trigger_conditions, correction_rule,
                        confidence_score, usage_count, success_rate, outcome_count,
                        created_at, last_updated
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    params![
                        record.pattern_id,
                        record.pattern_type,
                        to_json(&record.trigger_conditions, "trigger_conditions")?,
                        record.rule_json,
                        record.confidence_score,
                        record.usage_count as i64,
                        record.success_rate,
                        record.outcome_count as i64,
                        record.created_at.to_rfc3339(),
                        record.last_updated.to_rfc3339(),
                    ],
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                Ok(PatternUpsert::Created)
            }
        }
    })
}

pub fn get_pattern(conn: &Connection, pattern_id: &str) -> GuardianResult<Option<PatternRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE pattern_id = ?1");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![pattern_id], |row| Ok(row_to_pattern(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// All patterns, highest confidence first.
pub fn list_patterns(conn: &Connection) -> GuardianResult<Vec<PatternRecord>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY confidence_score DESC, pattern_id ASC");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok(row_to_pattern(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut patterns = Vec::new();
    for row in rows {
        let record = row.map_err(|e| to_storage_err(e.to_string()))??;
        patterns.push(record);
    }
    Ok(patterns)
}

pub fn update_pattern(conn: &Connection, record: &PatternRecord) -> GuardianResult<bool> {
    let rows = conn
        .execute(
            "UPDATE learned_patterns
             SET confidence_score = ?2, success_rate = ?3, outcome_count = ?4,
                 usage_count = ?5, last_updated = ?6
             WHERE pattern_id = ?1",
            params![
                record.pattern_id,
                record.confidence_score,
                record.success_rate,
                record.outcome_count as i64,
                record.usage_count as i64,
                record.last_updated.to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(rows > 0)
}

pub fn delete_pattern(conn: &Connection, pattern_id: &str) -> GuardianResult<bool> {
    let rows = conn
        .execute(
            "DELETE FROM learned_patterns WHERE pattern_id = ?1",
            params![pattern_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(rows > 0)
}

pub fn count_patterns(conn: &Connection) -> GuardianResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM learned_patterns", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

fn row_to_pattern(row: &rusqlite::Row<'_>) -> GuardianResult<PatternRecord> {
    let triggers_json = text(row, 2)?;
    // Unparseable triggers decode to an empty list; readers treat that as malformed.
    let trigger_conditions: Vec<String> = serde_json::from_str(&triggers_json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unparseable trigger_conditions column");
        Vec::new()
    });

    let get_f64 = |idx: usize| -> GuardianResult<f64> {
        row.get(idx).map_err(|e| to_storage_err(e.to_string()))
    };
    let get_u64 = |idx: usize| -> GuardianResult<u64> {
        row.get::<_, i64>(idx)
            .map(|n| n.max(0) as u64)
            .map_err(|e| to_storage_err(e.to_string()))
    };

    Ok(PatternRecord {
        pattern_id: text(row, 0)?,
        pattern_type: text(row, 1)?,
        trigger_conditions,
        rule_json: text(row, 3)?,
        confidence_score: get_f64(4)?,
        usage_count: get_u64(5)?,
        success_rate: get_f64(6)?,
        outcome_count: get_u64(7)?,
        created_at: parse_dt(&text(row, 8)?)?,
        last_updated: parse_dt(&text(row, 9)?)?,
    })
}
