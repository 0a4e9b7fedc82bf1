//! CourseIndex: course records keyed by identifier.
//!
//! Each course is addressed by its position in input order. Positions double
//! as node indices in [`LinkIndex`](super::LinkIndex) and give every output
//! list a stable order.

use coursegraph_core::errors::IndexError;
use coursegraph_core::types::{Course, FxHashMap, MinimalCourse};

#[derive(Debug, Default)]
pub struct CourseIndex {
    courses: Vec<Course>,
    minimal: Vec<MinimalCourse>,
    positions: FxHashMap<String, usize>,
}

impl CourseIndex {
    /// Build the index. Fails on the first repeated identifier.
    pub fn build(courses: Vec<Course>) -> Result<Self, IndexError> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(courses.len(), Default::default());
        for (pos, course) in courses.iter().enumerate() {
            if positions.insert(course.slug.clone(), pos).is_some() {
                return Err(IndexError::DuplicateIdentifier {
                    slug: course.slug.clone(),
                });
            }
        }
        let minimal = courses.iter().map(Course::minimal).collect();
        Ok(Self {
            courses,
            minimal,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.positions.get(slug).copied()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.positions.contains_key(slug)
    }

    /// Full record by identifier.
    pub fn get(&self, slug: &str) -> Option<&Course> {
        self.position(slug).map(|pos| &self.courses[pos])
    }

    /// Full record by position.
    ///
    /// # Panics
    /// Panics if `pos` is out of range.
    pub fn course_at(&self, pos: usize) -> &Course {
        &self.courses[pos]
    }

    /// Minimal record by position.
    ///
    /// # Panics
    /// Panics if `pos` is out of range.
    pub fn minimal_at(&self, pos: usize) -> &MinimalCourse {
        &self.minimal[pos]
    }

    /// All full records in input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}
