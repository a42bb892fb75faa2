mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_asset_display_names_path() {
        let err = RendererError::asset("resources/objects/bed.glb", "no such file");
        assert_eq!(
            err.to_string(),
            "failed to load resources/objects/bed.glb: no such file"
        );
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 800,
            height: 600,
        };
        assert!((size.aspect() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn physical_size_aspect_never_divides_by_zero() {
        let size = PhysicalSize {
            width: 10,
            height: 0,
        };
        assert_eq!(size.aspect(), 10.0);
    }
}
