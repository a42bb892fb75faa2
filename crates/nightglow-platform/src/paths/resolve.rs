use std::path::{Path, PathBuf};

use nightglow_common::PlatformError;

pub(super) const APP_NAME: &str = "nightglow";

/// Returns the platform-specific configuration directory for Nightglow.
///
/// - macOS: `~/Library/Application Support/nightglow`
/// - Linux: `$XDG_CONFIG_HOME/nightglow` (defaults to `~/.config/nightglow`)
/// - Windows: `%APPDATA%\nightglow`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Resolve an asset path from the config against the asset root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_asset(asset_root: &Path, relative: &str) -> PathBuf {
    let path = Path::new(relative);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        asset_root.join(path)
    }
}
