//! Text content of the debug overlay.

use nightglow_common::Rgb;

use crate::camera::Camera;
use crate::postprocess::PostProcessParams;

/// Everything the overlay reports for one frame.
pub struct OverlayInfo<'a> {
    pub camera: &'a Camera,
    pub post: PostProcessParams,
    pub clear_color: Rgb,
    pub camera_mouse_enabled: bool,
    pub fps: f64,
    pub frame_time_ms: f64,
    /// `(key, description)` pairs for the help line.
    pub key_hints: &'a [(String, &'static str)],
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub fn overlay_lines(info: &OverlayInfo<'_>) -> Vec<String> {
    let cam = info.camera;
    let p = cam.position;
    let f = cam.front;
    let c = info.clear_color;
    let mut lines = vec![
        format!("nightglow  {:.0} fps  {:.2} ms", info.fps, info.frame_time_ms),
        format!("camera  ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
        format!("yaw {:.1}  pitch {:.1}  zoom {:.1}", cam.yaw, cam.pitch, cam.zoom),
        format!("front  ({:.2}, {:.2}, {:.2})", f.x, f.y, f.z),
        format!("camera mouse update: {}", on_off(info.camera_mouse_enabled)),
        format!(
            "hdr: {}  bloom: {}  exposure: {:.3}",
            on_off(info.post.hdr),
            on_off(info.post.bloom),
            info.post.exposure
        ),
        format!("clear color  ({:.2}, {:.2}, {:.2})", c.r, c.g, c.b),
    ];
    if !info.key_hints.is_empty() {
        let hints: Vec<String> = info
            .key_hints
            .iter()
            .map(|(key, what)| format!("{key} {what}"))
            .collect();
        lines.push(hints.join(" | "));
    }
    lines
}
