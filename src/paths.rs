//! Centralized path definitions for fittropolis
//!
//! This module provides a single source of truth for all filesystem paths used by fittropolis.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.fittropolis/
//! ├── config.toml               # User preferences (optional)
//! └── storage.json              # Key/value storage holding the pantry
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".fittropolis";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default key/value storage filename
const STORAGE_FILE: &str = "storage.json";

/// Get the global fittropolis directory.
///
/// Returns `~/.fittropolis/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.fittropolis/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default storage file path.
///
/// Returns `~/.fittropolis/storage.json`.
#[must_use]
pub fn default_storage() -> PathBuf {
    global_dir().join(STORAGE_FILE)
}
