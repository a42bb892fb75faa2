//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use nightglow_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("move_forward", &config.move_forward),
        ("move_backward", &config.move_backward),
        ("move_left", &config.move_left),
        ("move_right", &config.move_right),
        ("toggle_hdr", &config.toggle_hdr),
        ("toggle_bloom", &config.toggle_bloom),
        ("exposure_up", &config.exposure_up),
        ("exposure_down", &config.exposure_down),
        ("toggle_overlay", &config.toggle_overlay),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison is case-insensitive: `"u"` and `"U"` are the same key.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = binding.to_ascii_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_10_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 10);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            quit: "W".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("move_forward"));
        assert!(err.contains("quit"));
    }

    #[test]
    fn duplicates_are_case_insensitive() {
        let config = KeybindConfig {
            toggle_bloom: "u".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn all_keybinds_has_correct_names() {
        let config = KeybindConfig::default();
        let binds = all_keybinds(&config);
        assert_eq!(binds[0], ("move_forward", "W"));
        assert_eq!(binds[4], ("toggle_hdr", "U"));
        assert_eq!(binds[8], ("toggle_overlay", "F1"));
    }
}
