//! Facet computation errors.

use super::error_code::{self, CourseGraphErrorCode};

/// A course in view lacks a value for one of the facet dimensions.
#[derive(Debug, thiserror::Error)]
pub enum FacetError {
    #[error("Course {course} is missing facet field `{field}`")]
    MissingFacetField { course: String, field: &'static str },
}

impl CourseGraphErrorCode for FacetError {
    fn error_code(&self) -> &'static str {
        error_code::MISSING_FACET_FIELD
    }
}
