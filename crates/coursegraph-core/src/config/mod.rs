//! Configuration system for the course graph view engine.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod coursegraph_config;
pub mod input_config;
pub mod materialize_config;
pub mod store_config;

pub use coursegraph_config::{CliOverrides, CourseGraphConfig};
pub use input_config::InputConfig;
pub use materialize_config::MaterializeConfig;
pub use store_config::StoreConfig;
