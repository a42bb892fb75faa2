//! Debug overlay: camera and post-processing state as text.

mod lines;
mod renderer;

pub use lines::{overlay_lines, OverlayInfo};
pub use renderer::OverlayRenderer;
