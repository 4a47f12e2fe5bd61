//! v002: q_values, the persisted policy-optimizer table.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS q_values (
    state      TEXT NOT NULL,
    action     TEXT NOT NULL,
    value      REAL NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    PRIMARY KEY (state, action)
);
";
