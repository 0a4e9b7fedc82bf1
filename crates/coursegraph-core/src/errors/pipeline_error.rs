//! Pipeline errors and non-fatal error collection.

use super::error_code::CourseGraphErrorCode;
use super::{
    ConfigError, FacetError, HierarchyError, IndexError, KeyError, LinkError, LoadError,
    StorageError,
};

/// Fatal errors of a materialization run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Facet error: {0}")]
    Facet(#[from] FacetError),

    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl CourseGraphErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Index(e) => e.error_code(),
            Self::Facet(e) => e.error_code(),
            Self::Hierarchy(e) => e.error_code(),
            Self::Key(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
        }
    }
}

/// Result of a stage that accumulates non-fatal link conditions.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal conditions collected along the way.
    pub errors: Vec<LinkError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new result with no collected errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: LinkError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
