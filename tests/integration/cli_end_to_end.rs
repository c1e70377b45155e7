//! End-to-end tests: the binary against a local one-shot HTTP server.

use super::test_utils::{run_cli, run_cli_with_env, stderr_of, stdout_of, OneShotServer};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_get_prints_pretty_json_to_stdout() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", r#"{"id":1,"title":"x"}"#).unwrap();

    let output = run_cli(
        home.path(),
        &["--base-url", &server.base_url, "get", "/posts/1"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "HTTP Status Code: 200\n{\n  \"id\": 1,\n  \"title\": \"x\"\n}\n"
    );
    let request = server.finish().unwrap();
    assert_eq!(request.request_line, "GET /posts/1 HTTP/1.1");
}

#[test]
fn test_get_writes_csv_file() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(
        200,
        "OK",
        r#"[{"id":1,"name":"x"},{"id":2,"name":"y"}]"#,
    )
    .unwrap();
    let path = home.path().join("users.csv");

    let output = run_cli(
        home.path(),
        &[
            "--base-url",
            &server.base_url,
            "get",
            "/users",
            "-o",
            path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(fs::read_to_string(&path).unwrap(), "id,name\n1,x\n2,y\n");
    assert!(stdout_of(&output).contains(&format!("Response written to {}", path.display())));
    server.finish().unwrap();
}

#[test]
fn test_get_writes_json_file_that_round_trips() {
    let home = TempDir::new().unwrap();
    let body = json!([{"userId": 1, "id": 3, "title": "fugiat", "completed": false}]);
    let server = OneShotServer::start(200, "OK", &body.to_string()).unwrap();

    let output = run_cli(
        home.path(),
        &["--base-url", &server.base_url, "get", "/todos", "-o", "todos.json"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let written = fs::read_to_string(home.path().join("todos.json")).unwrap();
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, body);
    assert!(written.starts_with("[\n  {\n    \"userId\": 1,"));
    server.finish().unwrap();
}

#[test]
fn test_post_sends_json_body() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(201, "Created", r#"{"id":101}"#).unwrap();

    let output = run_cli(
        home.path(),
        &[
            "--base-url",
            &server.base_url,
            "post",
            "/posts",
            "-d",
            r#"{"title": "foo", "userId": 1}"#,
        ],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert!(stdout_of(&output).starts_with("HTTP Status Code: 201\n"));

    let request = server.finish().unwrap();
    assert_eq!(request.request_line, "POST /posts HTTP/1.1");
    let sent: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent, json!({"title": "foo", "userId": 1}));
}

#[test]
fn test_non_success_status_exits_one_without_output_file() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(404, "Not Found", "<html>missing</html>").unwrap();
    let path = home.path().join("missing.json");

    let output = run_cli(
        home.path(),
        &[
            "--base-url",
            &server.base_url,
            "get",
            "/nope",
            "-o",
            path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "HTTP Status Code: 404\nError: Non-2XX response received. Exiting.\n"
    );
    assert!(!path.exists());
    server.finish().unwrap();
}

#[test]
fn test_malformed_data_fails_before_any_request() {
    let home = TempDir::new().unwrap();

    // Nothing listens here; the run must fail on the body, not the connection.
    let output = run_cli(
        home.path(),
        &[
            "--base-url",
            "http://127.0.0.1:9",
            "post",
            "/posts",
            "-d",
            "{title:",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).contains("Request body is not valid JSON"),
        "stderr={}",
        stderr_of(&output)
    );
}

#[test]
fn test_csv_of_single_object_is_an_error() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", r#"{"id":1}"#).unwrap();
    let path = home.path().join("post.csv");

    let output = run_cli(
        home.path(),
        &[
            "--base-url",
            &server.base_url,
            "get",
            "/posts/1",
            "-o",
            path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("CSV output requires a list of objects"));
    assert!(!path.exists());
    server.finish().unwrap();
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let home = TempDir::new().unwrap();
    let server = OneShotServer::start(200, "OK", r#"{"a":1}"#).unwrap();

    let output = run_cli(
        home.path(),
        &["--verbose", "--base-url", &server.base_url, "get", "/a"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "HTTP Status Code: 200\n{\n  \"a\": 1\n}\n");
    assert!(
        !stderr_of(&output).trim().is_empty(),
        "verbose mode should emit logs to stderr"
    );
    server.finish().unwrap();
}

#[test]
fn test_requests_go_through_http_proxy() {
    let home = TempDir::new().unwrap();
    // The one-shot server plays the proxy; the API host itself does not resolve.
    let proxy = OneShotServer::start(200, "OK", r#"{"via":"proxy"}"#).unwrap();

    let output = run_cli_with_env(
        home.path(),
        &[("HTTP_PROXY", proxy.base_url.as_str())],
        &["--base-url", "http://api.example.invalid", "get", "/posts/1"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "HTTP Status Code: 200\n{\n  \"via\": \"proxy\"\n}\n"
    );
    let request = proxy.finish().unwrap();
    assert_eq!(
        request.request_line,
        "GET http://api.example.invalid/posts/1 HTTP/1.1"
    );
}
