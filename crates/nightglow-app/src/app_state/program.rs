//! Mutable program state shared by input handling and rendering.

use glam::Vec3;
use nightglow_common::{Action, Rgb};
use nightglow_config::{NightglowConfig, PersistedSettings};
use nightglow_renderer::{Camera, CameraMovement, PostProcessParams};

/// Everything input can change between frames.
#[derive(Debug, Clone)]
pub struct ProgramState {
    pub clear_color: Rgb,
    pub overlay_enabled: bool,
    pub camera: Camera,
    /// Mouse motion rotates the camera only while this is set. Always the
    /// inverse of `overlay_enabled`.
    pub camera_mouse_enabled: bool,
    pub post: PostProcessParams,
}

/// Side effects of one frame's actions that the app must carry out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub overlay_toggled: bool,
    pub quit: bool,
}

impl ProgramState {
    pub fn from_config(config: &NightglowConfig) -> Self {
        Self {
            clear_color: Rgb::BLACK,
            overlay_enabled: false,
            camera: Camera::from_config(&config.camera),
            camera_mouse_enabled: true,
            post: PostProcessParams::from_config(&config.post_process),
        }
    }

    /// Apply values read from the program state file.
    pub fn restore(&mut self, settings: &PersistedSettings) {
        self.clear_color = settings.clear_color;
        self.overlay_enabled = settings.overlay_enabled;
        self.camera_mouse_enabled = !settings.overlay_enabled;
        self.camera.position = Vec3::from_array(settings.camera_position);
        if !self.camera.set_front(Vec3::from_array(settings.camera_front)) {
            tracing::warn!(
                "Ignoring saved camera direction {:?}",
                settings.camera_front
            );
        }
    }

    /// Snapshot for the program state file.
    pub fn to_settings(&self) -> PersistedSettings {
        PersistedSettings {
            clear_color: self.clear_color,
            overlay_enabled: self.overlay_enabled,
            camera_position: self.camera.position.to_array(),
            camera_front: self.camera.front.to_array(),
        }
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_enabled = !self.overlay_enabled;
        self.camera_mouse_enabled = !self.overlay_enabled;
    }

    /// Apply the actions polled for this frame.
    ///
    /// With both exposure keys held only the decrement applies.
    pub fn apply_actions(
        &mut self,
        actions: &[Action],
        delta_seconds: f32,
        exposure_step: f32,
    ) -> ActionOutcome {
        let mut outcome = ActionOutcome::default();

        for action in actions {
            match action {
                Action::MoveForward => self
                    .camera
                    .process_keyboard(CameraMovement::Forward, delta_seconds),
                Action::MoveBackward => self
                    .camera
                    .process_keyboard(CameraMovement::Backward, delta_seconds),
                Action::MoveLeft => self
                    .camera
                    .process_keyboard(CameraMovement::Left, delta_seconds),
                Action::MoveRight => self
                    .camera
                    .process_keyboard(CameraMovement::Right, delta_seconds),
                Action::ToggleHdr => {
                    let on = self.post.toggle_hdr();
                    tracing::debug!("HDR {}", if on { "on" } else { "off" });
                }
                Action::ToggleBloom => {
                    let on = self.post.toggle_bloom();
                    tracing::debug!("Bloom {}", if on { "on" } else { "off" });
                }
                Action::ToggleOverlay => {
                    self.toggle_overlay();
                    outcome.overlay_toggled = true;
                }
                Action::Quit => outcome.quit = true,
                Action::IncreaseExposure | Action::DecreaseExposure => {}
            }
        }

        if actions.contains(&Action::DecreaseExposure) {
            self.post.decrease_exposure(exposure_step);
        } else if actions.contains(&Action::IncreaseExposure) {
            self.post.increase_exposure(exposure_step);
        }

        outcome
    }
}
