//! CourseGraphErrorCode trait for operator-facing diagnostics.

/// Every error enum implements this to provide a stable, upper-case code
/// that batch operators can grep for in job logs.
pub trait CourseGraphErrorCode {
    /// Returns the error code string (e.g., "DUPLICATE_IDENTIFIER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DUPLICATE_IDENTIFIER: &str = "DUPLICATE_IDENTIFIER";
pub const DANGLING_LINK_ENDPOINT: &str = "DANGLING_LINK_ENDPOINT";
pub const MISSING_FACET_FIELD: &str = "MISSING_FACET_FIELD";
pub const HIERARCHY_INCONSISTENCY: &str = "HIERARCHY_INCONSISTENCY";
pub const INVALID_KEY: &str = "INVALID_KEY";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
