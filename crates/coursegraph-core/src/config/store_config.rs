use serde::{Deserialize, Serialize};

use crate::constants;

/// Where views are written and how their keys are named.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database path.
    pub path: Option<String>,
    /// Prefix of every hierarchy view key.
    pub namespace: Option<String>,
    /// Prefix of the per-course key space.
    pub course_prefix: Option<String>,
    /// Key of the presentation tree payload.
    pub nav_key: Option<String>,
}

impl StoreConfig {
    pub fn effective_path(&self) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_STORE_PATH.to_string())
    }

    pub fn effective_namespace(&self) -> String {
        self.namespace
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_NAMESPACE.to_string())
    }

    pub fn effective_course_prefix(&self) -> String {
        self.course_prefix
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_COURSE_PREFIX.to_string())
    }

    pub fn effective_nav_key(&self) -> String {
        self.nav_key
            .clone()
            .unwrap_or_else(|| constants::DEFAULT_NAV_KEY.to_string())
    }
}
