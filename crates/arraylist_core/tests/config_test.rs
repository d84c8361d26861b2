//! Integration test for loading list configuration from TOML files.

use arraylist_core::{ArrayList, ArrayListConfig, ConfigError, GrowthFactor};

fn temp_config_path(name: &str) -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("arraylist_{name}_{id}.toml"))
}

#[test]
fn test_load_config_file_and_build() {
    let path = temp_config_path("valid");
    std::fs::write(
        &path,
        "initial_capacity = 16\n\n[growth]\nnumerator = 2\ndenominator = 1\n",
    )
    .unwrap();

    let config = ArrayListConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.initial_capacity, 16);
    assert_eq!(config.growth, GrowthFactor::new(2, 1));

    let mut list = ArrayList::with_config(&config).unwrap();
    assert_eq!(list.capacity(), 16);
    for i in 0..17 {
        list.add_last(i).unwrap();
    }
    assert_eq!(list.capacity(), 32);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let path = temp_config_path("missing");
    let err = ArrayListConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = temp_config_path("invalid");
    std::fs::write(&path, "initial_capacity = 1\n").unwrap();

    let err = ArrayListConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    std::fs::remove_file(&path).ok();
}
