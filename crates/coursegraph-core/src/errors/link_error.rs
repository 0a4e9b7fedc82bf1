//! Link filtering conditions.

use super::error_code::{self, CourseGraphErrorCode};

/// Non-fatal link conditions. The offending link is excluded and the run
/// continues; these are collected, never returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    // Fields avoid the name `source`, which thiserror reserves for the cause.
    #[error("Link {source_id} -> {target_id} references unknown course {missing}")]
    DanglingLinkEndpoint {
        source_id: String,
        target_id: String,
        missing: String,
    },
}

impl CourseGraphErrorCode for LinkError {
    fn error_code(&self) -> &'static str {
        error_code::DANGLING_LINK_ENDPOINT
    }
}
