//! Per-frame input polling, mouse look and cursor capture.

use winit::event::MouseScrollDelta;
use winit::window::CursorGrabMode;

use nightglow_common::PlatformError;
use nightglow_platform::mouse::{motion_to_angles, pixel_scroll_to_lines};

use super::core::NightglowApp;

impl NightglowApp {
    /// Resolve held keys into actions and apply them before rendering.
    pub(super) fn poll_input(&mut self, delta_seconds: f32) {
        let actions = self.input.poll(&self.registry);
        if actions.is_empty() {
            return;
        }
        tracing::trace!(?actions, "input actions");

        let outcome = self.program.apply_actions(
            &actions,
            delta_seconds,
            self.config.post_process.exposure_step,
        );
        if outcome.overlay_toggled {
            tracing::debug!(
                "Overlay {}",
                if self.program.overlay_enabled { "on" } else { "off" }
            );
            self.apply_cursor_mode();
        }
        if outcome.quit {
            tracing::info!("Quit requested");
            self.should_exit = true;
        }
    }

    /// Grab and hide the cursor while the camera follows the mouse,
    /// release it otherwise.
    pub(super) fn apply_cursor_mode(&self) {
        let Some(window) = &self.window else {
            return;
        };

        if self.program.camera_mouse_enabled {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                tracing::warn!("{}", PlatformError::CursorError(e.to_string()));
            }
            window.set_cursor_visible(false);
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                tracing::debug!("{}", PlatformError::CursorError(e.to_string()));
            }
            window.set_cursor_visible(true);
        }
    }

    pub(super) fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if !self.program.camera_mouse_enabled {
            return;
        }
        let camera = &mut self.program.camera;
        let (yaw, pitch) = motion_to_angles(dx, dy, camera.mouse_sensitivity);
        camera.process_mouse_movement(yaw, pitch, true);
    }

    pub(super) fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pixel_scroll_to_lines(pos.y),
        };
        self.program.camera.process_mouse_scroll(lines);
    }
}
