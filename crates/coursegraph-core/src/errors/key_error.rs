//! Key construction errors.

use super::error_code::{self, CourseGraphErrorCode};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Key segment is empty")]
    EmptySegment,

    #[error("Key segment `{segment}` contains the separator `_`")]
    SeparatorInSegment { segment: String },

    #[error("Key `{key}` collides with a reserved key space")]
    ReservedCollision { key: String },
}

impl CourseGraphErrorCode for KeyError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_KEY
    }
}
