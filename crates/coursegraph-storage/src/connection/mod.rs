//! Connection utilities: pragmas and immediate write transactions.

pub mod pragmas;
pub mod writer;

use coursegraph_core::errors::StorageError;

/// Map a rusqlite error into the storage error taxonomy.
pub(crate) fn to_storage_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}
