//! Filesystem locations the app reads and writes at runtime.

use std::path::PathBuf;

use nightglow_config::NightglowConfig;

/// Settings file and asset root after command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings_file: PathBuf,
    pub asset_root: PathBuf,
}

impl AppPaths {
    pub fn resolve(
        config: &NightglowConfig,
        settings_override: Option<PathBuf>,
        assets_override: Option<PathBuf>,
    ) -> Self {
        let paths = Self {
            settings_file: settings_override
                .unwrap_or_else(|| PathBuf::from(&config.persistence.settings_file)),
            asset_root: assets_override.unwrap_or_else(|| PathBuf::from(&config.scene.asset_root)),
        };
        tracing::debug!(
            settings = %paths.settings_file.display(),
            assets = %paths.asset_root.display(),
            "Resolved app paths"
        );
        paths
    }
}
