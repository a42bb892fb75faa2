use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("settings file error: {0}")]
    SettingsError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    #[error("cursor error: {0}")]
    CursorError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NightglowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("asset error: {0}")]
    Asset(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("render.width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: render.width = 0 is out of range"
        );

        let err = ConfigError::SettingsError("bad token".into());
        assert_eq!(err.to_string(), "settings file error: bad token");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidKeybind("empty keybind string".into());
        assert_eq!(err.to_string(), "invalid keybind: empty keybind string");

        let err = PlatformError::CursorError("grab not supported".into());
        assert_eq!(err.to_string(), "cursor error: grab not supported");
    }

    #[test]
    fn nightglow_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: NightglowError = config_err.into();
        assert!(matches!(err, NightglowError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn nightglow_error_from_platform() {
        let platform_err = PlatformError::PathError("no home".into());
        let err: NightglowError = platform_err.into();
        assert!(matches!(err, NightglowError::Platform(_)));
        assert!(err.to_string().contains("no home"));
    }

    #[test]
    fn nightglow_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NightglowError = io_err.into();
        assert!(matches!(err, NightglowError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn nightglow_error_other_variants() {
        let err = NightglowError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "renderer error: no adapter");

        let err = NightglowError::Asset("cottage.glb".into());
        assert_eq!(err.to_string(), "asset error: cottage.glb");

        let err = NightglowError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
