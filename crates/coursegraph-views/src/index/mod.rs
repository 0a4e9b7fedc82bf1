//! Immutable indices built once per run.

pub mod course_index;
pub mod link_index;

pub use course_index::CourseIndex;
pub use link_index::LinkIndex;
