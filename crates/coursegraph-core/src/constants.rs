//! Shared constants for the course graph view engine.

/// Separator between key segments.
pub const KEY_SEPARATOR: char = '_';

/// Default namespace prefix for hierarchy view keys.
pub const DEFAULT_NAMESPACE: &str = "epfl";

/// Default prefix of the per-course key space.
pub const DEFAULT_COURSE_PREFIX: &str = "course";

/// Default key holding the presentation tree payload.
pub const DEFAULT_NAV_KEY: &str = "nav";

/// Default SQLite database path.
pub const DEFAULT_STORE_PATH: &str = "coursegraph.db";

/// Default input locations, relative to the working directory.
pub const DEFAULT_COURSES_PATH: &str = "data/processed/courses.json";
pub const DEFAULT_LINKS_PATH: &str = "data/processed/links.json";
pub const DEFAULT_HIERARCHY_PATH: &str = "data/processed/epfl.json";

/// Title and slug of the synthetic root node.
pub const ALL_COURSES_TITLE: &str = "All courses";
pub const ALL_COURSES_SLUG: &str = "all-courses";

/// Default number of threads (0 = rayon default).
pub const DEFAULT_THREADS: usize = 0;

/// Upper bound accepted for `materialize.threads`.
pub const MAX_THREADS: usize = 256;

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "coursegraph.toml";
