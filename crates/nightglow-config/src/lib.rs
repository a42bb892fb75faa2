//! Nightglow configuration system.
//!
//! TOML configuration with a commented template, full validation and the
//! small persisted program-state file. All config sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nightglow_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod validation;

pub use schema::{NightglowConfig, CONFIG_SCHEMA_VERSION};
pub use settings::{load_settings, save_settings, PersistedSettings};

use nightglow_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// path (creating it on first run).
pub fn load_config(path: Option<&Path>) -> Result<NightglowConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &NightglowConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
