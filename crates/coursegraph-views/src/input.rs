//! JSON input loading.

use std::fs;
use std::path::Path;

use coursegraph_core::config::InputConfig;
use coursegraph_core::errors::{LoadError, PipelineError};
use coursegraph_core::types::{CatalogNode, Course, Link};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::catalog::parse_hierarchy;

/// Everything one materialization run consumes.
#[derive(Debug, Clone)]
pub struct CatalogInput {
    pub courses: Vec<Course>,
    pub links: Vec<Link>,
    pub hierarchy: CatalogNode,
    /// Presentation tree payload, written verbatim when present.
    pub nav: Option<Value>,
}

/// Read and parse the configured input files.
pub fn load_inputs(config: &InputConfig) -> Result<CatalogInput, PipelineError> {
    let courses: Vec<Course> = read_json(&config.effective_courses())?;
    let links: Vec<Link> = read_json(&config.effective_links())?;
    let hierarchy_value: Value = read_json(&config.effective_hierarchy())?;
    let hierarchy = parse_hierarchy(&hierarchy_value)?;
    let nav = match &config.nav {
        Some(path) => Some(read_json::<Value>(path)?),
        None => None,
    };

    debug!(
        courses = courses.len(),
        links = links.len(),
        nav = nav.is_some(),
        "inputs loaded"
    );
    Ok(CatalogInput {
        courses,
        links,
        hierarchy,
        nav,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = InputConfig {
            courses: Some(write(dir.path(), "c.json", r#"[{"slug":"a","code":"A","name":"A"}]"#)),
            links: Some(write(dir.path(), "l.json", r#"[{"source":"a","target":"a","weight":1}]"#)),
            hierarchy: Some(write(dir.path(), "h.json", r#"{"levels":[]}"#)),
            nav: Some(write(dir.path(), "n.json", r#"[{"id":"x"}]"#)),
        };
        let input = load_inputs(&config).unwrap();
        assert_eq!(input.courses.len(), 1);
        assert_eq!(input.links, vec![Link::new("a", "a")]);
        assert!(input.hierarchy.children.is_empty());
        assert!(input.nav.is_some());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = InputConfig {
            courses: Some(dir.path().join("absent.json")),
            ..Default::default()
        };
        assert!(matches!(
            load_inputs(&config),
            Err(PipelineError::Load(LoadError::Read { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = InputConfig {
            courses: Some(write(dir.path(), "c.json", "[{")),
            ..Default::default()
        };
        assert!(matches!(
            load_inputs(&config),
            Err(PipelineError::Load(LoadError::Parse { .. }))
        ));
    }
}
