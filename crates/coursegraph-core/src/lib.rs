//! # coursegraph-core
//!
//! Foundation crate for the course graph view engine.
//! Defines the record types, the `ViewStore` trait, errors, config and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CourseGraphConfig;
pub use errors::{PipelineError, PipelineResult};
pub use traits::ViewStore;
pub use types::{
    CatalogNode, Course, EntityKind, FilterFacets, Link, MinimalCourse, NeighborhoodView,
    Relation, ViewCourse, ViewRecord,
};
