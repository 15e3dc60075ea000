//! Global configuration management
//!
//! Provides user preferences for where the pantry is stored and how corrupt
//! data is treated. Config is stored at `~/.fittropolis/config.toml`:
//!
//! ```toml
//! [storage]
//! path = "/home/me/pantry.json"
//! on_corrupt = "fail"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::services::CorruptPolicy;
use crate::paths;

/// Global fittropolis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Storage preferences
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file location (defaults to `~/.fittropolis/storage.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// What to do when the stored pantry cannot be decoded
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if absent or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(toml::from_str::<Self>(&content)?));

        match parsed {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring config at {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolved storage file path
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(paths::default_storage)
    }
}
