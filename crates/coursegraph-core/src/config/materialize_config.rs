use serde::{Deserialize, Serialize};

use crate::constants;

/// Materialization pass settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterializeConfig {
    /// Worker threads for per-node resolution. 0 = rayon default.
    pub threads: Option<usize>,
}

impl MaterializeConfig {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(constants::DEFAULT_THREADS)
    }
}
