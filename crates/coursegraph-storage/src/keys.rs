//! Deterministic key construction.
//!
//! Rules:
//! - segments are joined with `_`;
//! - a hierarchy view key is the namespace followed by the node's slug path
//!   (`epfl`, `epfl_master`, `epfl_master_cs`, `epfl_master_cs_foundations`);
//! - a course key is the course prefix followed by the course slug
//!   (`course_cs-101`);
//! - the presentation tree lives under a single reserved key (`nav`).
//!
//! Hierarchy segments must be non-empty and must not contain `_`, so a key
//! maps back to exactly one path. Course slugs only need to be non-empty:
//! the course key space has a fixed two-part shape.

use coursegraph_core::config::StoreConfig;
use coursegraph_core::constants::KEY_SEPARATOR;
use coursegraph_core::errors::KeyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScheme {
    namespace: String,
    course_prefix: String,
    nav_key: String,
}

impl KeyScheme {
    pub fn new(
        namespace: impl Into<String>,
        course_prefix: impl Into<String>,
        nav_key: impl Into<String>,
    ) -> Result<Self, KeyError> {
        let scheme = Self {
            namespace: namespace.into(),
            course_prefix: course_prefix.into(),
            nav_key: nav_key.into(),
        };
        for reserved in [&scheme.namespace, &scheme.course_prefix, &scheme.nav_key] {
            check_segment(reserved)?;
        }
        if scheme.namespace == scheme.course_prefix || scheme.namespace == scheme.nav_key {
            return Err(KeyError::ReservedCollision {
                key: scheme.namespace,
            });
        }
        if scheme.course_prefix == scheme.nav_key {
            return Err(KeyError::ReservedCollision {
                key: scheme.nav_key,
            });
        }
        Ok(scheme)
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, KeyError> {
        Self::new(
            config.effective_namespace(),
            config.effective_course_prefix(),
            config.effective_nav_key(),
        )
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key of the hierarchy node at `path` (empty path = root).
    pub fn view_key<S: AsRef<str>>(&self, path: &[S]) -> Result<String, KeyError> {
        let mut key = self.namespace.clone();
        for segment in path {
            let segment = segment.as_ref();
            check_segment(segment)?;
            key.push(KEY_SEPARATOR);
            key.push_str(segment);
        }
        Ok(key)
    }

    /// Key of the verbatim record of one course.
    pub fn course_key(&self, slug: &str) -> Result<String, KeyError> {
        if slug.is_empty() {
            return Err(KeyError::EmptySegment);
        }
        Ok(format!("{}{KEY_SEPARATOR}{slug}", self.course_prefix))
    }

    pub fn nav_key(&self) -> &str {
        &self.nav_key
    }
}

fn check_segment(segment: &str) -> Result<(), KeyError> {
    if segment.is_empty() {
        return Err(KeyError::EmptySegment);
    }
    if segment.contains(KEY_SEPARATOR) {
        return Err(KeyError::SeparatorInSegment {
            segment: segment.to_string(),
        });
    }
    Ok(())
}
