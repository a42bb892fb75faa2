//! Configuration schema types for Nightglow.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the stock night scene.

mod camera;
mod keybind_config;
mod persistence;
mod render;
mod scene;
mod system;
mod window;

pub use camera::*;
pub use keybind_config::*;
pub use persistence::*;
pub use render::*;
pub use scene::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Nightglow.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NightglowConfig {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub post_process: PostProcessConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub keybinds: KeybindConfig,
    pub persistence: PersistenceConfig,
    pub logging: LoggingConfig,
}
