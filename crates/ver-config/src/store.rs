//! Engagement store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of the persisted engagement collection.
pub const STORE_FILE_NAME: &str = "engagements.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Explicit path to the engagement file. Empty means the platform data dir.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Resolve the engagement file path.
    ///
    /// Falls back to `<data_dir>/veridian/engagements.json`, then to
    /// `.veridian/engagements.json` in the working directory when the platform
    /// has no data dir.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.trim().is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".veridian").join(STORE_FILE_NAME),
            |dir| dir.join("veridian").join(STORE_FILE_NAME),
        )
    }
}
