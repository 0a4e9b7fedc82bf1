//! Seams between the engine and its collaborators.

pub mod view_store;

pub use view_store::ViewStore;
