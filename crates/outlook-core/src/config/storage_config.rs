//! Storage configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DB_PATH;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    /// Ignore `db_path` and keep everything in memory.
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            in_memory: false,
        }
    }
}
