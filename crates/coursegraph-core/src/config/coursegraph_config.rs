//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputConfig, MaterializeConfig, StoreConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COURSEGRAPH_*`)
/// 3. Project config (`coursegraph.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CourseGraphConfig {
    pub input: InputConfig,
    pub store: StoreConfig,
    pub materialize: MaterializeConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub courses: Option<PathBuf>,
    pub links: Option<PathBuf>,
    pub hierarchy: Option<PathBuf>,
    pub nav: Option<PathBuf>,
    pub store_path: Option<String>,
    pub namespace: Option<String>,
    pub threads: Option<usize>,
}

/// Environment variables consulted by [`CourseGraphConfig::load`].
pub const ENV_VARS: &[&str] = &[
    "COURSEGRAPH_INPUT_COURSES",
    "COURSEGRAPH_INPUT_LINKS",
    "COURSEGRAPH_INPUT_HIERARCHY",
    "COURSEGRAPH_INPUT_NAV",
    "COURSEGRAPH_STORE_PATH",
    "COURSEGRAPH_STORE_NAMESPACE",
    "COURSEGRAPH_MATERIALIZE_THREADS",
];

impl CourseGraphConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `coursegraph.toml` is not an error; a malformed one is.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "project config merged");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CourseGraphConfig) -> Result<(), ConfigError> {
        let namespace = config.store.effective_namespace();
        let course_prefix = config.store.effective_course_prefix();
        let nav_key = config.store.effective_nav_key();

        for (field, value) in [
            ("store.namespace", &namespace),
            ("store.course_prefix", &course_prefix),
            ("store.nav_key", &nav_key),
        ] {
            if value.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if value.contains(constants::KEY_SEPARATOR) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must not contain `{}`", constants::KEY_SEPARATOR),
                });
            }
        }
        if namespace == course_prefix || namespace == nav_key || course_prefix == nav_key {
            return Err(ConfigError::ValidationFailed {
                field: "store".to_string(),
                message: "namespace, course_prefix and nav_key must be distinct".to_string(),
            });
        }
        if config.materialize.effective_threads() > constants::MAX_THREADS {
            return Err(ConfigError::ValidationFailed {
                field: "materialize.threads".to_string(),
                message: format!("must be at most {}", constants::MAX_THREADS),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CourseGraphConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: CourseGraphConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CourseGraphConfig, other: &CourseGraphConfig) {
        // Input
        if other.input.courses.is_some() {
            base.input.courses = other.input.courses.clone();
        }
        if other.input.links.is_some() {
            base.input.links = other.input.links.clone();
        }
        if other.input.hierarchy.is_some() {
            base.input.hierarchy = other.input.hierarchy.clone();
        }
        if other.input.nav.is_some() {
            base.input.nav = other.input.nav.clone();
        }

        // Store
        if other.store.path.is_some() {
            base.store.path = other.store.path.clone();
        }
        if other.store.namespace.is_some() {
            base.store.namespace = other.store.namespace.clone();
        }
        if other.store.course_prefix.is_some() {
            base.store.course_prefix = other.store.course_prefix.clone();
        }
        if other.store.nav_key.is_some() {
            base.store.nav_key = other.store.nav_key.clone();
        }

        // Materialize
        if other.materialize.threads.is_some() {
            base.materialize.threads = other.materialize.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COURSEGRAPH_STORE_PATH`, `COURSEGRAPH_MATERIALIZE_THREADS`, etc.
    fn apply_env_overrides(config: &mut CourseGraphConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("COURSEGRAPH_INPUT_COURSES") {
            config.input.courses = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_INPUT_LINKS") {
            config.input.links = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_INPUT_HIERARCHY") {
            config.input.hierarchy = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_INPUT_NAV") {
            config.input.nav = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_STORE_PATH") {
            config.store.path = Some(val);
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_STORE_NAMESPACE") {
            config.store.namespace = Some(val);
        }
        if let Ok(val) = std::env::var("COURSEGRAPH_MATERIALIZE_THREADS") {
            let threads = val.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "COURSEGRAPH_MATERIALIZE_THREADS".to_string(),
                message: e.to_string(),
            })?;
            config.materialize.threads = Some(threads);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CourseGraphConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.courses {
            config.input.courses = Some(v.clone());
        }
        if let Some(ref v) = cli.links {
            config.input.links = Some(v.clone());
        }
        if let Some(ref v) = cli.hierarchy {
            config.input.hierarchy = Some(v.clone());
        }
        if let Some(ref v) = cli.nav {
            config.input.nav = Some(v.clone());
        }
        if let Some(ref v) = cli.store_path {
            config.store.path = Some(v.clone());
        }
        if let Some(ref v) = cli.namespace {
            config.store.namespace = Some(v.clone());
        }
        if let Some(v) = cli.threads {
            config.materialize.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
