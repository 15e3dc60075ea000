//! Tests for global configuration

use std::fs;
use std::path::PathBuf;

use fittropolis::config::GlobalConfig;
use fittropolis::core::services::CorruptPolicy;
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("config.toml"));

    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Reset);
    assert!(config.storage.path.is_none());
    assert!(config.storage_path().ends_with(".fittropolis/storage.json"));
}

#[test]
fn test_config_reads_storage_section() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[storage]\npath = \"/data/pantry.json\"\non_corrupt = \"fail\"\n").unwrap();

    let config = GlobalConfig::load_from(&path);

    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Fail);
    assert_eq!(config.storage_path(), PathBuf::from("/data/pantry.json"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[storage]\non_corrupt = \"fail\"\n").unwrap();

    let config = GlobalConfig::load_from(&path);

    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Fail);
    assert!(config.storage.path.is_none());
}

#[test]
fn test_unparsable_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[storage\non_corrupt = ").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Reset);
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let mut config = GlobalConfig::default();
    config.storage.on_corrupt = CorruptPolicy::Fail;
    config.storage.path = Some(PathBuf::from("/tmp/pantry.json"));
    config.save_to(&path).unwrap();

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded.storage.on_corrupt, CorruptPolicy::Fail);
    assert_eq!(loaded.storage_path(), PathBuf::from("/tmp/pantry.json"));
}

#[test]
fn test_policy_aliases_match_cli_names() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    for (name, expected) in [
        ("reset", CorruptPolicy::Reset),
        ("empty", CorruptPolicy::Reset),
        ("fail", CorruptPolicy::Fail),
        ("error", CorruptPolicy::Fail),
        ("strict", CorruptPolicy::Fail),
    ] {
        let content =
            format!("[storage]\npath = \"/data/pantry.json\"\non_corrupt = \"{name}\"\n");
        fs::write(&path, content).unwrap();

        let config = GlobalConfig::load_from(&path);
        assert_eq!(config.storage.on_corrupt, expected, "{name}");
        assert_eq!(name.parse::<CorruptPolicy>().unwrap(), expected, "{name}");
        // The rest of the config survives
        assert_eq!(config.storage_path(), PathBuf::from("/data/pantry.json"), "{name}");
    }
}
