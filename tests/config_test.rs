use release_tools::config::{load_config, Config};
use release_tools::ReleaseToolsError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.labels.pick_into, "Pick into {minor}");
    assert!(!config.status.dry_run);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[labels]
pick_into = "backport {minor}"

[docs]
release_process_url = "https://docs.example.com/releases"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.labels.pick_into, "backport {minor}");
    assert_eq!(
        config.docs.release_process_url,
        "https://docs.example.com/releases"
    );
    assert!(config.catalog.versions.is_empty());
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[labels\npick_into = 3").unwrap();
    temp_file.flush().unwrap();

    let path = temp_file.path().to_str().unwrap();
    let err = load_config(Some(path)).unwrap_err();
    assert!(matches!(err, ReleaseToolsError::Config(_)));
    let message = err.to_string();
    assert!(message.starts_with("Configuration error: "));
    assert!(message.contains(path));
}

#[test]
fn test_load_missing_file() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, ReleaseToolsError::Io(_)));
}

#[test]
fn test_status_and_catalog_from_file() {
    let config = load_config(Some("tests/fixtures/config_with_status.toml"))
        .expect("Failed to load test config");
    assert!(config.status.security_release);
    assert!(config.status.dry_run);
    assert_eq!(config.catalog.versions.len(), 6);
}
