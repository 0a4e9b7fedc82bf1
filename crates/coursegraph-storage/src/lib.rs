//! # coursegraph-storage
//!
//! Persistence of materialized views: the key scheme that names every view,
//! a SQLite-backed key-value store and an in-memory store for tests and
//! dry runs.

pub mod connection;
pub mod keys;
pub mod memory_store;
pub mod migrations;
pub mod sqlite_store;

pub use keys::KeyScheme;
pub use memory_store::MemoryViewStore;
pub use sqlite_store::SqliteViewStore;
