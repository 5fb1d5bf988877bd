use plugin_page::config::{ConfigError, HostConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = HostConfig::default();

    assert_eq!(config.logging.filter, "info");
    assert!(config.storage.path.ends_with("config.json"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"[storage]
path = "/tmp/plugin-page/state.json"
"#,
    )
    .unwrap();

    let config = HostConfig::load_from(&config_path).unwrap();
    assert_eq!(
        config.storage.path,
        PathBuf::from("/tmp/plugin-page/state.json")
    );
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_load_from_empty_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    assert_eq!(
        HostConfig::load_from(&config_path).unwrap(),
        HostConfig::default()
    );
}

#[test]
fn test_load_from_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[storage\npath = ").unwrap();

    assert!(matches!(
        HostConfig::load_from(&config_path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_load_from_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        HostConfig::load_from(&temp_dir.path().join("absent.toml")),
        Err(ConfigError::ReadError { .. })
    ));
}

#[test]
fn test_validation_rejects_blank_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"[storage]
path = ""

[logging]
filter = "debug"
"#,
    )
    .unwrap();

    assert!(matches!(
        HostConfig::load_from(&config_path),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = HostConfig::default();
    config.logging.filter = "   ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
