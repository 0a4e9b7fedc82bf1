//! Course index construction errors.

use super::error_code::{self, CourseGraphErrorCode};

/// Errors raised while building the course index. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Duplicate course identifier: {slug}")]
    DuplicateIdentifier { slug: String },
}

impl CourseGraphErrorCode for IndexError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifier { .. } => error_code::DUPLICATE_IDENTIFIER,
        }
    }
}
