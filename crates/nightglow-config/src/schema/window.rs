//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window creation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 1-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 1-16384).
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "nightglow".into(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}
