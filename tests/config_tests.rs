use std::collections::HashMap;
use std::path::PathBuf;

use cellfill::config::{self, AppConfig, ConfigError};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.tip_offset, 5.0);
}

#[test]
fn test_reads_all_settings() {
    let config = AppConfig::from_lookup(lookup(&[
        (config::OPEN_ENV, "data/table.json"),
        (config::ROW_HEIGHT_ENV, "24"),
        (config::COLUMN_WIDTH_ENV, " 90.5 "),
        (config::MOCK_SIZE_ENV, "50x8"),
    ]))
    .unwrap();
    assert_eq!(config.open_path, Some(PathBuf::from("data/table.json")));
    assert_eq!(config.row_height, 24.0);
    assert_eq!(config.column_width, 90.5);
    assert_eq!((config.mock_rows, config.mock_columns), (50, 8));
}

#[test]
fn test_blank_open_path_is_ignored() {
    let config = AppConfig::from_lookup(lookup(&[(config::OPEN_ENV, "  ")])).unwrap();
    assert_eq!(config.open_path, None);
}

#[test]
fn test_rejects_non_positive_lengths() {
    let err = AppConfig::from_lookup(lookup(&[(config::ROW_HEIGHT_ENV, "0")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: config::ROW_HEIGHT_ENV,
            value: "0".to_string(),
        }
    );
    assert!(AppConfig::from_lookup(lookup(&[(config::COLUMN_WIDTH_ENV, "wide")])).is_err());
}

#[test]
fn test_rejects_malformed_mock_size() {
    let err = AppConfig::from_lookup(lookup(&[(config::MOCK_SIZE_ENV, "12")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for CELLFILL_MOCK_SIZE: \"12\"");
}
