//! Integration tests for configuration layering as seen from the binary.

use super::test_utils::{run_cli, run_cli_with_env, stderr_of, stdout_of, OneShotServer};
use restful::config::RestfulConfig;
use std::fs;
use tempfile::TempDir;

fn write_config(path: &std::path::Path, base_url: &str) {
    let mut config = RestfulConfig::default();
    config.api.base_url = base_url.to_string();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, toml::to_string_pretty(&config).unwrap()).unwrap();
}

#[test]
fn test_explicit_config_file_sets_base_url() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", "[]").unwrap();
    let config_path = home.path().join("restful.toml");
    write_config(&config_path, &server.base_url);

    let output = run_cli(
        home.path(),
        &["--config", config_path.to_str().unwrap(), "get", "/posts"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "HTTP Status Code: 200\n[]\n");
    server.finish().unwrap();
}

#[test]
fn test_global_config_file_is_picked_up() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", "[]").unwrap();
    write_config(
        &home.path().join("config").join("restful").join("config.toml"),
        &server.base_url,
    );

    let output = run_cli(home.path(), &["get", "/posts", "-o", "empty.csv"]);

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(
        fs::read_to_string(home.path().join("empty.csv")).unwrap(),
        ""
    );
    server.finish().unwrap();
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        &["--config", "does-not-exist.toml", "get", "/posts"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Configuration error"));
}

#[test]
fn test_environment_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", r#"{"ok":true}"#).unwrap();
    // The file points nowhere useful; the environment must win.
    write_config(
        &home.path().join("config").join("restful").join("config.toml"),
        "http://127.0.0.1:9",
    );

    let output = run_cli_with_env(
        home.path(),
        &[("RESTFUL_API__BASE_URL", server.base_url.as_str())],
        &["get", "/status"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "HTTP Status Code: 200\n{\n  \"ok\": true\n}\n");
    let request = server.finish().unwrap();
    assert_eq!(request.request_line, "GET /status HTTP/1.1");
}
