//! V001 migration: the key-value table holding materialized views.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS views (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    written_at INTEGER NOT NULL DEFAULT (unixepoch())
) STRICT;
"#;
