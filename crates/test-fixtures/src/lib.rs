//! Test fixture loader for the shared catalog datasets.
//!
//! Fixtures live in `test-fixtures/` at the workspace root. The `catalog/`
//! set is a small two-level catalog with mutual prerequisites, a program
//! without specializations, an empty specialization and one dangling link.

use std::path::PathBuf;

use coursegraph_core::config::InputConfig;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the data folder shows up.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("catalog").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Absolute path of a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Input configuration pointing at the catalog fixture set.
pub fn catalog_input_config(with_nav: bool) -> InputConfig {
    InputConfig {
        courses: Some(fixture_path("catalog/courses.json")),
        links: Some(fixture_path("catalog/links.json")),
        hierarchy: Some(fixture_path("catalog/hierarchy.json")),
        nav: with_nav.then(|| fixture_path("catalog/nav.json")),
    }
}
