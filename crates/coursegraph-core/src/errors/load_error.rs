//! Input loading errors.

use super::error_code::{self, CourseGraphErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Cannot parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl CourseGraphErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::LOAD_ERROR
    }
}
