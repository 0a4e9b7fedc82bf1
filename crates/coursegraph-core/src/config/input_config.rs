use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Locations of the validated ingestion outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Course record list (JSON array).
    pub courses: Option<PathBuf>,
    /// Prerequisite link list (JSON array).
    pub links: Option<PathBuf>,
    /// Catalog hierarchy (JSON object).
    pub hierarchy: Option<PathBuf>,
    /// Presentation tree payload, stored verbatim. Skipped when unset.
    pub nav: Option<PathBuf>,
}

impl InputConfig {
    pub fn effective_courses(&self) -> PathBuf {
        self.courses
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_COURSES_PATH))
    }

    pub fn effective_links(&self) -> PathBuf {
        self.links
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_LINKS_PATH))
    }

    pub fn effective_hierarchy(&self) -> PathBuf {
        self.hierarchy
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_HIERARCHY_PATH))
    }
}
