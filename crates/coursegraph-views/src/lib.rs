//! # coursegraph-views
//!
//! Materializes one neighborhood view per catalog hierarchy node.
//!
//! Pipeline: load → build indices → parse hierarchy → plan walk →
//! resolve every node (in parallel) → write all views in one batch.
//! Indices are immutable after construction and every view is a pure
//! function of (subset, links, courses).

pub mod catalog;
pub mod facets;
pub mod index;
pub mod input;
pub mod neighborhood;
pub mod pipeline;
pub mod walker;

pub use catalog::parse_hierarchy;
pub use facets::build_facets;
pub use index::{CourseIndex, LinkIndex};
pub use input::{load_inputs, CatalogInput};
pub use neighborhood::{resolve, Subset};
pub use pipeline::{MaterializeReport, Materializer};
pub use walker::CatalogWalker;
