pub mod camera;
pub mod gpu;
pub mod mesh;
pub mod model;
pub mod overlay;
pub mod perf;
pub mod postprocess;
pub mod render_state;
pub mod scene;
pub mod texture;

pub use camera::{Camera, CameraMovement};
pub use gpu::{GpuContext, RendererError};
pub use overlay::{overlay_lines, OverlayInfo};
pub use perf::FrameTimer;
pub use postprocess::PostProcessParams;
pub use render_state::{FrameInput, RenderState};
