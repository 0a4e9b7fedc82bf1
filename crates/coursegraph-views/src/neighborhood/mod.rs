//! Neighborhood resolution: induced subgraph plus classified one-hop boundary.

pub mod boundary;
pub mod resolver;
pub mod subset;

pub use boundary::Boundary;
pub use resolver::resolve;
pub use subset::Subset;
