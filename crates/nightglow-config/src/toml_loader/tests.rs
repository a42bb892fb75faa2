//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, NightglowConfig};
use nightglow_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_nightglow_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[render]
blur_passes = 7

[post_process]
hdr = true
exposure = 0.5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.render.blur_passes, 7);
    assert!(config.post_process.hdr);
    assert_eq!(config.post_process.exposure, 0.5);
    // Defaults preserved
    assert_eq!(config.render.width, 800);
    assert!(!config.post_process.bloom);
    assert_eq!(config.keybinds.toggle_hdr, "U");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_blur_passes_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[render]
blur_passes = 500
"#,
    )
    .unwrap();

    let result = load_from_path(&path);
    assert!(
        matches!(&result, Err(ConfigError::ValidationError(msg)) if msg.contains("render.blur_passes")),
        "got {result:?}"
    );
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nightglow").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "nightglow");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: NightglowConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.render.blur_passes, 10);
    assert_eq!(config.scene.objects.len(), NightglowConfig::default().scene.objects.len());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("nightglow"));
        assert!(path_str.ends_with("config.toml"));
    }
}
