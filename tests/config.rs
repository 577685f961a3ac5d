//! Configuration loading from maps and TOML files.

use std::collections::BTreeMap;
use std::io::Write;

use shopfront::{Config, FilterRefresh, ShopfrontError};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_file() {
    let file = config_file("trace_level = \"debug\"\nfilter_refresh = \"matching-view\"\n");
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.filter_refresh, FilterRefresh::MatchingView);
}

#[test]
fn missing_keys_take_defaults() {
    let file = config_file("");
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.filter_refresh, FilterRefresh::Always);
}

#[test]
fn unknown_refresh_value_is_rejected() {
    let file = config_file("filter_refresh = \"sometimes\"\n");
    let err = Config::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ShopfrontError::Toml(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ShopfrontError::Io(_)));
}

#[test]
fn map_parsing_falls_back_on_unknown_values() {
    let mut map = BTreeMap::new();
    map.insert("filter_refresh".to_string(), "sometimes".to_string());
    map.insert("trace_level".to_string(), "warn".to_string());

    let config = Config::from_map(&map);
    assert_eq!(config.filter_refresh, FilterRefresh::Always);
    assert_eq!(config.trace_level.as_deref(), Some("warn"));
}

#[test]
fn store_uses_configured_policy() {
    let config = Config {
        filter_refresh: FilterRefresh::MatchingView,
        ..Config::default()
    };
    let store = shopfront::initialize(&config);
    assert_eq!(store.refresh_policy(), FilterRefresh::MatchingView);
}
