//! Frame rendering logic.

use nightglow_renderer::{overlay_lines, FrameInput, OverlayInfo};

use super::core::NightglowApp;

impl NightglowApp {
    /// Advance the frame clock, poll input, then render one frame.
    pub(super) fn render_frame(&mut self) {
        let delta_seconds = self.timer.begin_frame();
        self.poll_input(delta_seconds);
        if self.should_exit {
            return;
        }

        let Some(rs) = self.render_state.as_mut() else {
            return;
        };

        let program = &self.program;
        let overlay = program.overlay_enabled.then(|| {
            overlay_lines(&OverlayInfo {
                camera: &program.camera,
                post: program.post,
                clear_color: program.clear_color,
                camera_mouse_enabled: program.camera_mouse_enabled,
                fps: self.timer.fps(),
                frame_time_ms: self.timer.frame_time_ms(),
                key_hints: &self.key_hints,
            })
        });

        let input = FrameInput {
            camera: &program.camera,
            post: program.post,
            clear_color: program.clear_color,
            overlay: overlay.as_deref(),
        };

        if let Err(e) = rs.render_frame(&input) {
            tracing::error!("Render error: {e}");
            self.should_exit = true;
        }
    }
}
