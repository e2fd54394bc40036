// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.reconnect_delay(), Duration::from_millis(2000));
    assert!(!config.sort_by_timestamp);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
base_url = "https://chat.example.com"
sort_by_timestamp = true
"#,
    )
    .unwrap();
    assert_eq!(config.base_url, "https://chat.example.com");
    assert!(config.sort_by_timestamp);
    assert_eq!(config.reconnect_delay_ms, 2000);
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn test_load_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "base_url = \"http://10.0.0.5:9000\"\nreconnect_delay_ms = 500\nrequest_timeout_secs = 3\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.reconnect_delay(), Duration::from_millis(500));
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
}

#[parameterized(
    zero_reconnect_delay = { "reconnect_delay_ms = 0", "reconnect_delay_ms" },
    zero_request_timeout = { "request_timeout_secs = 0", "request_timeout_secs" },
)]
fn test_load_rejects_zero_durations(content: &str, field: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains(field));
}

#[test]
fn test_load_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "reconnect_delay_ms = \"soon\"").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_resolve_explicit_missing_path_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");
    let err = Config::resolve(Some(&path), None).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
}

#[test]
fn test_resolve_url_flag_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "base_url = \"http://from-file:1\"\nreconnect_delay_ms = 10\n").unwrap();

    let config = Config::resolve(Some(&path), Some("http://from-flag:2".to_string())).unwrap();
    assert_eq!(config.base_url, "http://from-flag:2");
    assert_eq!(config.reconnect_delay_ms, 10);
}

#[test]
fn test_with_base_url() {
    let config = Config::default().with_base_url(None);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    let config = config.with_base_url(Some("https://x.test".to_string()));
    assert_eq!(config.base_url, "https://x.test");
}

#[parameterized(
    local = {
        "http://127.0.0.1:8000",
        "http://127.0.0.1:8000/get/msg",
        "http://127.0.0.1:8000/post/send",
        "ws://127.0.0.1:8000/ws",
    },
    trailing_slash = {
        "http://localhost:8000/",
        "http://localhost:8000/get/msg",
        "http://localhost:8000/post/send",
        "ws://localhost:8000/ws",
    },
    tls = {
        "https://chat.example.com",
        "https://chat.example.com/get/msg",
        "https://chat.example.com/post/send",
        "wss://chat.example.com/ws",
    },
    path_prefix = {
        "https://example.com/chat/",
        "https://example.com/chat/get/msg",
        "https://example.com/chat/post/send",
        "wss://example.com/chat/ws",
    },
)]
fn test_endpoints_from_base(base: &str, fetch: &str, send: &str, push: &str) {
    let endpoints = Endpoints::from_base(base).unwrap();
    assert_eq!(endpoints.fetch.as_str(), fetch);
    assert_eq!(endpoints.send.as_str(), send);
    assert_eq!(endpoints.push.as_str(), push);
}

#[parameterized(
    no_scheme = { "localhost:8000" },
    ftp = { "ftp://example.com" },
    websocket = { "ws://example.com" },
    garbage = { "not a url" },
    empty = { "" },
    query = { "http://example.com/?room=1" },
)]
fn test_endpoints_rejects(base: &str) {
    let err = Endpoints::from_base(base).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl { .. }), "got {err:?}");
}

#[test]
fn test_config_endpoints() {
    let endpoints = Config::default().endpoints().unwrap();
    assert_eq!(endpoints.push.scheme(), "ws");
}

#[test]
fn test_default_config_path_file_name() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("murmur/config.toml"));
    }
}
