//! Persisted program state file.
//!
//! Ten whitespace-separated values in a fixed order: clear color (r g b),
//! overlay flag (0/1), camera position (x y z), camera front (x y z).
//! Reading stops at the first missing or malformed token; fields after it
//! keep whatever value the caller passed in.

use nightglow_common::{ConfigError, Rgb};
use std::path::Path;
use tracing::{debug, info};

/// Values carried across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistedSettings {
    pub clear_color: Rgb,
    pub overlay_enabled: bool,
    pub camera_position: [f32; 3],
    pub camera_front: [f32; 3],
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            clear_color: Rgb::BLACK,
            overlay_enabled: false,
            camera_position: [4.0, 5.0, 6.0],
            camera_front: [0.0, 0.0, -1.0],
        }
    }
}

const FIELD_NAMES: [&str; 10] = [
    "clear_r",
    "clear_g",
    "clear_b",
    "overlay_enabled",
    "camera_pos_x",
    "camera_pos_y",
    "camera_pos_z",
    "camera_front_x",
    "camera_front_y",
    "camera_front_z",
];

/// Parse `content` into `settings`, field by field.
///
/// On error the fields read so far are already applied and the rest are left
/// untouched; the error names the first field that could not be read.
pub fn parse_settings(content: &str, settings: &mut PersistedSettings) -> Result<(), ConfigError> {
    let mut tokens = content.split_whitespace();

    for (index, name) in FIELD_NAMES.iter().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| ConfigError::SettingsError(format!("missing value for {name}")))?;
        let bad = || ConfigError::SettingsError(format!("invalid value for {name}: '{token}'"));

        if index == 3 {
            settings.overlay_enabled = match token {
                "0" => false,
                "1" => true,
                _ => return Err(bad()),
            };
            continue;
        }

        // `f32::from_str` accepts "nan" and "inf"; neither is a usable value.
        let value = token
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(bad)?;
        match index {
            0 => settings.clear_color.r = value,
            1 => settings.clear_color.g = value,
            2 => settings.clear_color.b = value,
            4..=6 => settings.camera_position[index - 4] = value,
            _ => settings.camera_front[index - 7] = value,
        }
    }

    Ok(())
}

/// Render settings in the on-disk format, one value per line.
pub fn format_settings(settings: &PersistedSettings) -> String {
    let c = settings.clear_color;
    let p = settings.camera_position;
    let f = settings.camera_front;
    let values: [String; 10] = [
        c.r.to_string(),
        c.g.to_string(),
        c.b.to_string(),
        u8::from(settings.overlay_enabled).to_string(),
        p[0].to_string(),
        p[1].to_string(),
        p[2].to_string(),
        f[0].to_string(),
        f[1].to_string(),
        f[2].to_string(),
    ];
    let mut out = values.join("\n");
    out.push('\n');
    out
}

/// Load the settings file into `settings`.
///
/// Returns `Ok(false)` when the file does not exist, which is the normal
/// first-run case. A partially valid file applies its leading fields and
/// returns the parse error.
pub fn load_settings(path: &Path, settings: &mut PersistedSettings) -> Result<bool, ConfigError> {
    if !path.exists() {
        debug!("no settings file at {}", path.display());
        return Ok(false);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::SettingsError(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_settings(&content, settings)?;

    info!("restored program state from {}", path.display());
    Ok(true)
}

/// Write the settings file, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &PersistedSettings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::SettingsError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, format_settings(settings)).map_err(|e| {
        ConfigError::SettingsError(format!("failed to write {}: {e}", path.display()))
    })?;

    info!("saved program state to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersistedSettings {
        PersistedSettings {
            clear_color: Rgb::new(0.1, 0.2, 0.3),
            overlay_enabled: true,
            camera_position: [1.5, -2.0, 3.25],
            camera_front: [0.0, -0.6, -0.8],
        }
    }

    #[test]
    fn parses_full_file() {
        let mut s = PersistedSettings::default();
        parse_settings("0.1\n0.2\n0.3\n1\n1.5\n-2\n3.25\n0\n-0.6\n-0.8\n", &mut s).unwrap();
        assert_eq!(s, sample());
    }

    #[test]
    fn tokens_may_share_lines() {
        let mut s = PersistedSettings::default();
        parse_settings("0.1 0.2 0.3 1\n1.5 -2 3.25   0 -0.6 -0.8", &mut s).unwrap();
        assert_eq!(s, sample());
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources").join("program_state.txt");

        save_settings(&path, &sample()).unwrap();
        let mut restored = PersistedSettings::default();
        assert!(load_settings(&path, &mut restored).unwrap());
        assert_eq!(restored, sample());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = PersistedSettings::default();
        let loaded = load_settings(&dir.path().join("absent.txt"), &mut s).unwrap();
        assert!(!loaded);
        assert_eq!(s, PersistedSettings::default());
    }

    #[test]
    fn truncated_file_keeps_defaults_for_missing_fields() {
        let mut s = PersistedSettings::default();
        let err = parse_settings("0.5 0.5 0.5 1 9", &mut s).unwrap_err();
        assert!(err.to_string().contains("camera_pos_y"));
        assert_eq!(s.clear_color, Rgb::new(0.5, 0.5, 0.5));
        assert!(s.overlay_enabled);
        assert_eq!(s.camera_position, [9.0, 5.0, 6.0]);
        assert_eq!(s.camera_front, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn malformed_token_stops_parsing() {
        let mut s = PersistedSettings::default();
        let err = parse_settings("0.2 abc 0.9 1 0 0 0 1 0 0", &mut s).unwrap_err();
        assert!(err.to_string().contains("clear_g"));
        assert_eq!(s.clear_color, Rgb::new(0.2, 0.0, 0.0));
        assert!(!s.overlay_enabled);
    }

    #[test]
    fn non_finite_values_are_malformed() {
        for token in ["nan", "inf", "-inf", "NaN", "infinity"] {
            let mut s = PersistedSettings::default();
            let content = format!("0.2 0.4 0.6 1 {token} 0 0 0 0 -1");
            let err = parse_settings(&content, &mut s).unwrap_err();
            assert!(err.to_string().contains("camera_pos_x"), "{token}: {err}");
            assert_eq!(s.clear_color, Rgb::new(0.2, 0.4, 0.6));
            assert!(s.overlay_enabled);
            assert_eq!(s.camera_position, [4.0, 5.0, 6.0]);
        }
    }

    #[test]
    fn overlay_flag_must_be_zero_or_one() {
        let mut s = PersistedSettings::default();
        let err = parse_settings("0 0 0 true 0 0 0 0 0 -1", &mut s).unwrap_err();
        assert!(err.to_string().contains("overlay_enabled"));
    }

    #[test]
    fn format_writes_one_value_per_line() {
        let text = format_settings(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[3], "1");
        assert_eq!(lines[6], "3.25");
    }
}
