use std::path::PathBuf;

/// Errors that can occur during GPU setup, asset loading or rendering.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("text rendering error: {0}")]
    TextError(String),

    #[error("failed to load {}: {reason}", path.display())]
    AssetError { path: PathBuf, reason: String },
}

impl RendererError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RendererError::AssetError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}
