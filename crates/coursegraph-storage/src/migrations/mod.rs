//! Schema migrations, tracked in `PRAGMA user_version`.

pub mod v001_views;

use coursegraph_core::errors::StorageError;
use rusqlite::Connection;

/// Ordered (version, SQL) pairs.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_views::MIGRATION_SQL)];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;
    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}

pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}
