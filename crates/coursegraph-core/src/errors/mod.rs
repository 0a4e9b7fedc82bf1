//! Error handling for the course graph view engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod facet_error;
pub mod hierarchy_error;
pub mod index_error;
pub mod key_error;
pub mod link_error;
pub mod load_error;
pub mod pipeline_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::CourseGraphErrorCode;
pub use facet_error::FacetError;
pub use hierarchy_error::HierarchyError;
pub use index_error::IndexError;
pub use key_error::KeyError;
pub use link_error::LinkError;
pub use load_error::LoadError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use storage_error::StorageError;
