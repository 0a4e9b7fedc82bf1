//! Storage errors.

use super::error_code::{self, CourseGraphErrorCode};

/// Errors that can occur while persisting or reading view records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("Serialization failed for {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("Lock on {store} poisoned by a panicked writer")]
    LockPoisoned { store: &'static str },
}

impl CourseGraphErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::LockPoisoned { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}
