//! Tests for layered configuration.

use hookline::{HooklineConfig, HooklineErrorKind};
use std::io::Write;

#[test]
fn test_bundled_defaults() {
    let config = HooklineConfig::from_toml_str("").unwrap();
    assert_eq!(config.service.model, "gemini-2.5-flash");
    assert_eq!(config.service.request_timeout_secs, 60);
    assert_eq!(*config.encoding.inline_threshold_bytes(), 20 * 1024 * 1024);
    assert_eq!(*config.encoding.poll_interval_ms(), 2000);
    assert_eq!(*config.encoding.max_poll_attempts(), 30);
    assert_eq!(*config.encoding.call_timeout_secs(), 60);
    assert_eq!(config.limits.max_total_bytes, 100 * 1024 * 1024);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hookline.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[service]\nmodel = \"gemini-2.5-pro\"\n\n[limits]\nmax_total_bytes = 4096").unwrap();

    let config = HooklineConfig::from_file(&path).unwrap();
    assert_eq!(config.service.model, "gemini-2.5-pro");
    assert_eq!(config.limits.max_total_bytes, 4096);
    assert_eq!(
        config.service.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = HooklineConfig::from_file(&path).unwrap_err();
    match err.kind() {
        HooklineErrorKind::Config(e) => {
            let source = e.source_path.as_deref().unwrap();
            assert!(source.ends_with("absent.toml"));
        }
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_config_error() {
    let err = HooklineConfig::from_toml_str("[encoding]\nmax_poll_attempts = \"many\"\n").unwrap_err();
    assert!(matches!(err.kind(), HooklineErrorKind::Config(_)));
}

#[test]
fn test_limits_reach_orchestrator() {
    let config = HooklineConfig::from_toml_str(
        "[service]\nrequest_timeout_secs = 15\n[limits]\nmax_total_bytes = 10\n",
    )
    .unwrap();
    let settings = config.orchestrator_settings().unwrap();
    assert_eq!(settings.request_timeout().as_secs(), 15);
    assert_eq!(*settings.max_total_bytes(), 10);
}

#[test]
fn test_gemini_settings_follow_service_table() {
    let config = HooklineConfig::from_toml_str(
        "[service]\nmodel = \"gemini-2.0-flash\"\nbase_url = \"http://localhost:8080\"\n",
    )
    .unwrap();
    let settings = config.gemini_settings();
    assert_eq!(settings.model, "gemini-2.0-flash");
    assert_eq!(settings.base_url, "http://localhost:8080");
}

#[test]
fn test_orchestrator_needs_api_key() {
    let config = HooklineConfig::default();
    let err = config.gemini_orchestrator("  ").unwrap_err();
    assert!(matches!(err.kind(), HooklineErrorKind::Gemini(_)));

    let orchestrator = config.gemini_orchestrator("test-key").unwrap();
    assert_eq!(*orchestrator.settings().max_total_bytes(), 100 * 1024 * 1024);
}
