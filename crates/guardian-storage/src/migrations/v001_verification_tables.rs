//! v001: verification_patterns (one row per content_hash) and
//! learned_patterns (one row per pattern_id).

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS verification_patterns (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id             TEXT NOT NULL,
    document_id          TEXT NOT NULL,
    original_extraction  TEXT NOT NULL,
    verified_extraction  TEXT NOT NULL,
    user_corrections     TEXT NOT NULL,
    confidence_per_field TEXT NOT NULL,
    content_sample       TEXT NOT NULL,
    content_hash         TEXT NOT NULL UNIQUE,
    document_type        TEXT NOT NULL,
    source_type          TEXT NOT NULL,
    timestamp            TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_verification_document ON verification_patterns(document_id);

CREATE TABLE IF NOT EXISTS learned_patterns (
    pattern_id         TEXT PRIMARY KEY,
    pattern_type       TEXT NOT NULL,
    trigger_conditions TEXT NOT NULL,
    correction_rule    TEXT NOT NULL,
    confidence_score   REAL NOT NULL,
    usage_count        INTEGER NOT NULL DEFAULT 1,
    success_rate       REAL NOT NULL DEFAULT 1.0,
    outcome_count      INTEGER NOT NULL DEFAULT 0,
    created_at         TEXT NOT NULL,
    last_updated       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_learned_patterns_type ON learned_patterns(pattern_type);
CREATE INDEX IF NOT EXISTS idx_learned_patterns_confidence ON learned_patterns(confidence_score);
";
