use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_KEY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

/// Where the list is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding slot files. Defaults to the platform data dir.
    pub dir: Option<PathBuf>,
    /// Slot name; the list is written to `<dir>/<key>.json`.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: DEFAULT_KEY.to_string(),
        }
    }
}
