//! First-person fly camera.
//!
//! Angles are stored in degrees. Yaw -90 looks down the negative Z axis.

use glam::{Mat3, Mat4, Vec3};
use nightglow_config::schema::CameraConfig;

/// Pitch limit applied when rotation is constrained.
pub const PITCH_LIMIT: f32 = 89.0;
/// Zoom (vertical field of view) range reachable with the scroll wheel.
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: config.speed,
            mouse_sensitivity: config.sensitivity,
            zoom: config.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            near: config.near,
            far: config.far,
        };
        camera.update_vectors();
        camera
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// View matrix with the translation removed.
    pub fn sky_view_matrix(&self) -> Mat4 {
        Mat4::from_mat3(Mat3::from_mat4(self.view_matrix()))
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, self.near, self.far)
    }

    /// Translate along the front/right vectors, scaled by frame time.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_seconds: f32) {
        let velocity = self.movement_speed * delta_seconds;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Rotate by already-scaled angle deltas in degrees.
    pub fn process_mouse_movement(&mut self, yaw_delta: f32, pitch_delta: f32, constrain_pitch: bool) {
        self.yaw += yaw_delta;
        self.pitch += pitch_delta;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Scroll up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, lines: f32) {
        self.zoom = (self.zoom - lines).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Point the camera along `front`, deriving yaw and pitch from it.
    ///
    /// Returns `false` and leaves the camera untouched for a zero or
    /// non-finite vector.
    pub fn set_front(&mut self, front: Vec3) -> bool {
        let Some(dir) = front.try_normalize() else {
            return false;
        };
        self.pitch = dir.y.asin().to_degrees().clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = dir.z.atan2(dir.x).to_degrees();
        self.update_vectors();
        true
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
