//! Course records: the full record as ingested and its minimal projection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A lecturer of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sciper: Option<String>,
}

/// A full course record.
///
/// Facet fields are optional at parse time so that a record lacking one is
/// reported by the facet builder with the offending identifier instead of a
/// bare parse error. Fields the engine does not interpret are kept in
/// `extra` and re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub slug: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_form: Option<String>,
    #[serde(default)]
    pub lecturers: Vec<Lecturer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    /// Project to the fields needed for display and filtering.
    pub fn minimal(&self) -> MinimalCourse {
        MinimalCourse {
            slug: self.slug.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            section: self.section.clone(),
            semester: self.semester.clone(),
            credits: self.credits,
        }
    }
}

/// Display/filter projection of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalCourse {
    pub slug: String,
    pub code: String,
    pub name: String,
    pub section: Option<String>,
    pub semester: Option<String>,
    pub credits: Option<u32>,
}
