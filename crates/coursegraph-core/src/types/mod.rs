//! Record types for the course graph view engine.
//!
//! Inputs (`Course`, `Link`, `CatalogNode`) are immutable once loaded;
//! outputs (`NeighborhoodView`, `FilterFacets`, `ViewRecord`) are built by
//! composition and never mutated after construction.

pub mod catalog;
pub mod collections;
pub mod course;
pub mod link;
pub mod view;

pub use catalog::{CatalogNode, EntityKind};
pub use collections::{BTreeMap, BTreeSet, FxHashMap, FxHashSet};
pub use course::{Course, Lecturer, MinimalCourse};
pub use link::Link;
pub use view::{
    ChildSummary, FilterFacets, NeighborhoodLinks, NeighborhoodNodes, NeighborhoodView, Relation,
    ViewCourse, ViewRecord,
};
