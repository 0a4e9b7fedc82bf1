//! SqliteViewStore: views persisted in a single SQLite key-value table.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use coursegraph_core::errors::StorageError;
use coursegraph_core::traits::ViewStore;
use rusqlite::{params, Connection, OptionalExtension};

use crate::connection::pragmas::apply_pragmas;
use crate::connection::to_storage_err;
use crate::connection::writer::with_immediate_transaction;
use crate::migrations;

const UPSERT_SQL: &str = "INSERT INTO views (key, value, written_at) VALUES (?1, ?2, unixepoch())
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, written_at = excluded.written_at";

/// Key-value store over one serialized write connection.
///
/// Reads go through the same connection: a batch job writes once and reads
/// back rarely, so a read pool buys nothing here.
pub struct SqliteViewStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteViewStore {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        Self::initialize(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        Self::initialize(conn, None)
    }

    fn initialize(conn: Connection, path: Option<PathBuf>) -> Result<Self, StorageError> {
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Execute an operation with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned {
            store: "sqlite connection",
        })?;
        f(&guard)
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn upsert(conn: &Connection, key: &str, value: &str) -> Result<(), StorageError> {
    conn.prepare_cached(UPSERT_SQL)
        .and_then(|mut stmt| stmt.execute(params![key, value]))
        .map_err(to_storage_err)?;
    Ok(())
}

impl ViewStore for SqliteViewStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| upsert(conn, key, value))
    }

    /// All entries land in one immediate transaction: either every view of
    /// the run is visible or none is.
    fn put_batch(&self, entries: &[(String, String)]) -> Result<usize, StorageError> {
        self.with_conn(|conn| {
            with_immediate_transaction(conn, |tx| {
                for (key, value) in entries {
                    upsert(tx, key, value)?;
                }
                Ok(entries.len())
            })
        })
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM views WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(to_storage_err)
        })
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare_cached(
                    "SELECT key FROM views
                     WHERE substr(key, 1, length(?1)) = ?1
                     ORDER BY key ASC",
                )
                .map_err(to_storage_err)?;
            let rows = stmt
                .query_map(params![prefix], |row| row.get(0))
                .map_err(to_storage_err)?;
            rows.collect::<Result<Vec<String>, _>>()
                .map_err(to_storage_err)
        })
    }

    fn len(&self) -> Result<usize, StorageError> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM views", [], |row| row.get(0))
                .map_err(to_storage_err)?;
            Ok(count as usize)
        })
    }
}
