//! FacetBuilder: distinct filter values among the courses in view.

use coursegraph_core::errors::FacetError;
use coursegraph_core::types::{BTreeSet, Course, FilterFacets};

/// Collect sorted distinct values per facet dimension.
///
/// Fails on the first course lacking a dimension, naming the course and the
/// field. An empty input yields empty lists.
pub fn build_facets<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
) -> Result<FilterFacets, FacetError> {
    let mut section = BTreeSet::new();
    let mut semester = BTreeSet::new();
    let mut credits = BTreeSet::new();
    let mut language = BTreeSet::new();
    let mut exam_form = BTreeSet::new();

    for course in courses {
        section.insert(required(course, "section", course.section.as_deref())?);
        semester.insert(required(course, "semester", course.semester.as_deref())?);
        credits.insert(required(course, "credits", course.credits)?);
        language.insert(required(course, "language", course.language.as_deref())?);
        exam_form.insert(required(course, "examForm", course.exam_form.as_deref())?);
    }

    Ok(FilterFacets {
        section: section.into_iter().map(str::to_string).collect(),
        semester: semester.into_iter().map(str::to_string).collect(),
        credits: credits.into_iter().collect(),
        language: language.into_iter().map(str::to_string).collect(),
        exam_form: exam_form.into_iter().map(str::to_string).collect(),
    })
}

fn required<T>(course: &Course, field: &'static str, value: Option<T>) -> Result<T, FacetError> {
    value.ok_or_else(|| FacetError::MissingFacetField {
        course: course.slug.clone(),
        field,
    })
}
