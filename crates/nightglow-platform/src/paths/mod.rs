mod resolve;

pub use resolve::{config_dir, config_file, resolve_asset};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_dir_ends_with_nightglow() {
        if let Ok(path) = config_dir() {
            assert!(path.ends_with("nightglow"), "got: {path:?}");
        }
    }

    #[test]
    fn config_file_has_correct_name() {
        if let Ok(path) = config_file() {
            assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
            assert!(path.parent().unwrap().ends_with("nightglow"));
        }
    }

    #[test]
    fn relative_asset_joins_root() {
        let p = resolve_asset(Path::new("resources"), "textures/sky.tga");
        assert_eq!(p, Path::new("resources").join("textures/sky.tga"));
    }

    #[test]
    fn absolute_asset_is_unchanged() {
        let abs = if cfg!(windows) { "C:\\assets\\a.glb" } else { "/assets/a.glb" };
        assert_eq!(resolve_asset(Path::new("resources"), abs), Path::new(abs));
    }
}
