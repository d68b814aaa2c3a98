// Loading bus settings from files on disk
use hello_core::{BusConfig, HelloError, SessionMode};
use std::io::Write;
use std::time::Duration;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
            mode = "client"
            connect = ["tcp/10.0.0.2:7447"]
            publish_period_ms = 250
        "#,
    );

    let config = BusConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.mode, SessionMode::Client);
    assert_eq!(config.publish_period(), Duration::from_millis(250));
}

#[test]
fn test_load_yaml_file() {
    let file = write_temp(
        ".yaml",
        "mode: peer\nsubscribe_wait_ms: 500\nmulticast_scouting: true\n",
    );

    let config = BusConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.subscribe_wait(), Duration::from_millis(500));
    assert_eq!(config.multicast_scouting, Some(true));
}

#[test]
fn test_unknown_extension_falls_back_to_yaml() {
    let file = write_temp(".conf", "publish_period_ms: 10\n");

    let config = BusConfig::from_file(file.path()).unwrap();
    assert_eq!(config.publish_period_ms, 10);
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_temp(".toml", "mode = [not valid");

    let err = BusConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, HelloError::Config(_)), "{}", err);
}

#[test]
fn test_missing_zenoh_config_file() {
    let config = BusConfig {
        zenoh_config: Some("/nonexistent/zenoh.json5".into()),
        ..BusConfig::default()
    };

    assert!(matches!(config.to_zenoh_config(), Err(HelloError::Config(_))));
}

#[test]
fn test_search_paths_start_in_working_directory() {
    let paths = BusConfig::get_search_paths();
    assert_eq!(paths[0], std::path::PathBuf::from("hello_bus.toml"));
    assert!(paths.iter().any(|p| p.ends_with("config.toml")));
}
