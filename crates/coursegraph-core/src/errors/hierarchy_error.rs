//! Hierarchy consistency errors.
//!
//! Raised while parsing the catalog tree or planning the walk, always before
//! the first write, so an inconsistent hierarchy never produces a partial
//! view set.

use super::error_code::{self, CourseGraphErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("Node {node} names child collection `{key}` which does not exist")]
    MissingChildCollection { node: String, key: String },

    #[error("Node {node} has child collection `{key}` which is not a list of nodes")]
    InvalidChildCollection { node: String, key: String },

    #[error("Leaf node {node} has no explicit course subset")]
    MissingCourseSubset { node: String },

    #[error("Node {node} is missing required field `{field}`")]
    MissingField { node: String, field: &'static str },

    #[error("Node {node} has an invalid `{field}` field")]
    InvalidField { node: String, field: String },

    #[error("Node {node} declares entity `{found}` but sits at `{expected}` depth")]
    EntityMismatch {
        node: String,
        expected: String,
        found: String,
    },

    #[error("Node {node} nests deeper than a specialization")]
    TooDeep { node: String },

    #[error("Node {node} references unknown course {course}")]
    UnknownCourse { node: String, course: String },

    #[error("Two hierarchy nodes resolve to the same key {key}")]
    DuplicateKey { key: String },
}

impl CourseGraphErrorCode for HierarchyError {
    fn error_code(&self) -> &'static str {
        error_code::HIERARCHY_INCONSISTENCY
    }
}
