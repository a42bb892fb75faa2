//! Core TOML config loading: read from path or platform default.

use crate::schema::NightglowConfig;
use crate::validation;
use nightglow_common::ConfigError;
use std::path::Path;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields. A file
/// that parses but fails validation is a `ValidationError` naming every
/// offending key. Nothing is logged here: this runs before the subscriber
/// exists, so the caller reports the outcome.
pub fn load_from_path(path: &Path) -> Result<NightglowConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NightglowConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/nightglow/config.toml`
/// On macOS: `~/Library/Application Support/nightglow/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<NightglowConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(NightglowConfig::default())
        }
        Err(e) => Err(e),
    }
}
