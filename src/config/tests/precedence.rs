//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"base_url": "http://default"})), ("file", json!({"base_url": "http://file"}))],
    "http://file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"base_url": "http://file"})), ("environment", json!({"base_url": "http://env"}))],
    "http://env",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"base_url": "http://env"})), ("cli", json!({"base_url": "http://cli"}))],
    "http://cli",
    "CLI should override environment"
)]
fn base_url_follows_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.base_url, expected, "{message}");
}

#[rstest]
fn unset_fields_keep_defaults() {
    let config = build_config_from_layers(&[("file", json!({"telemetry": true}))]);

    assert!(config.telemetry);
    assert_eq!(config.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.shake_duration_ms, 650);
    assert_eq!(config.banner_duration_ms, 5000);
    assert_eq!(config.request_timeout_seconds, 10);
}

#[rstest]
fn durations_load_from_file_and_cli() {
    let config = build_config_from_layers(&[
        ("file", json!({"banner_duration_ms": 3000, "shake_duration_ms": 400})),
        ("cli", json!({"banner_duration_ms": 1000})),
    ]);

    let timings = config.timings();

    assert_eq!(timings.banner.as_millis(), 1000, "CLI should win");
    assert_eq!(timings.shake.as_millis(), 400, "file value should apply");
}
