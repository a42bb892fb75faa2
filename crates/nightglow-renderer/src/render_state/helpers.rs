use std::sync::atomic::{AtomicBool, Ordering};

/// Log once, after the first frame reaches the surface.
pub(super) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: AtomicBool = AtomicBool::new(false);
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!("First frame presented ({width}x{height}, format={format:?})");
    }
}
