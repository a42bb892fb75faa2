//! First-person camera configuration.

use serde::{Deserialize, Serialize};

/// Initial camera placement and tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees. -90 faces down the negative Z axis.
    pub yaw: f32,
    /// Degrees (valid range: -89.0-89.0).
    pub pitch: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of mouse motion.
    pub sensitivity: f32,
    /// Vertical field of view in degrees (valid range: 1.0-45.0).
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [4.0, 5.0, 6.0],
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
